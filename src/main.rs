//! Sealed Hangman demo
//!
//! Plays one scripted game between two locally generated keys.
//! The secret word comes from the first argument (default "hangman");
//! the guesser tries letters in English frequency order.

use anyhow::{bail, Context, Result};
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sealed_hangman::{
    game::{events::GameEvent, turn::start_events},
    proof::signature::sign_guess,
    submit_guess, verify_guess, GameConfig, GameView, Outcome, PlayerKey, SetterSecret, VERSION,
};

/// Guess order for the scripted guesser.
const GUESS_ORDER: &str = "etaoinshrdlucmfwypvbgkjqxz";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Sealed Hangman v{}", VERSION);

    let config = GameConfig::from_env();
    let text = std::env::args().nth(1).unwrap_or_else(|| "hangman".to_string());
    let word = config.parse_word(&text).context("choosing the secret word")?;

    demo_game(&config, SetterSecret::with_random_blinding(word))
}

/// Run a full game and log the board after every round.
fn demo_game(config: &GameConfig, secret: SetterSecret) -> Result<()> {
    info!("=== Starting Demo Game ===");

    let setter_key = SigningKey::generate(&mut OsRng);
    let guesser_key = SigningKey::generate(&mut OsRng);
    let setter = PlayerKey::from_signing_key(&setter_key);
    let guesser = PlayerKey::from_signing_key(&guesser_key);

    info!("Setter:  {}", setter.short_hex());
    info!("Guesser: {}", guesser.short_hex());

    let (mut game, commitment) = config.init_game(setter, guesser, &secret)?;
    info!("Game ID: {}", game.id.to_uuid_string());
    for event in start_events(&game).events {
        info!("{}", serde_json::to_string(&event)?);
    }
    info!("Commitment: {}", commitment);
    info!("Guesser has {} lives - good luck!", config.miss_limit);

    for c in GUESS_ORDER.chars() {
        let guess = config.parse_guess(c)?;
        submit_guess(&mut game, &guesser, &sign_guess(&guesser_key, guess), guess)?;

        let reveal_sig = secret.sign_reveal(&setter_key);
        let result = verify_guess(&mut game, &setter, &reveal_sig, &secret.word, &secret.blinding)?;

        print_status(&GameView::of(&game))?;

        if let Some(GameEvent::GameEnded { outcome, .. }) = result.events.last() {
            match outcome {
                Outcome::GuesserWins => info!("The winner is the guesser"),
                Outcome::GuesserLoses => info!("The winner is the setter; the word was '{}'", secret.word),
                Outcome::Ongoing => {}
            }
            info!("Final record hash: {}", hex::encode(game.compute_hash()));
            return Ok(());
        }
    }

    bail!("ran out of letters before the game ended")
}

/// Log the public board.
fn print_status(view: &GameView) -> Result<()> {
    info!("{}", "-".repeat(20));
    info!("Word: {}", view.masked()?);
    info!("Last Guess: {}", view.last_guess_char().unwrap_or(' '));
    info!("Incorrect Guesses: {} ({} lives left)", view.miss_count, view.remaining_lives());
    info!("{}", "-".repeat(20));
    Ok(())
}
