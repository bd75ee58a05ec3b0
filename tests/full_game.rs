//! End-to-end games through the public API.

use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;

use sealed_hangman::{
    game::events::GameEvent,
    proof::signature::sign_guess,
    submit_guess, verify_guess, Blinding, Game, GameConfig, GameView, Outcome, PlayerKey,
    ProtocolError, SetterSecret, Symbol, Turn,
};

struct Players {
    setter_key: SigningKey,
    guesser_key: SigningKey,
    setter: PlayerKey,
    guesser: PlayerKey,
}

impl Players {
    fn new() -> Self {
        let setter_key = SigningKey::generate(&mut OsRng);
        let guesser_key = SigningKey::generate(&mut OsRng);
        Self {
            setter: PlayerKey::from_signing_key(&setter_key),
            guesser: PlayerKey::from_signing_key(&guesser_key),
            setter_key,
            guesser_key,
        }
    }

    fn play(&self, game: &mut Game, secret: &SetterSecret, c: char) -> Vec<GameEvent> {
        let guess = Symbol::from_char(c).unwrap();
        submit_guess(game, &self.guesser, &sign_guess(&self.guesser_key, guess), guess).unwrap();
        verify_guess(
            game,
            &self.setter,
            &secret.sign_reveal(&self.setter_key),
            &secret.word,
            &secret.blinding,
        )
        .unwrap()
        .events
    }
}

#[test]
fn test_cat_win() {
    let players = Players::new();
    let secret = SetterSecret::new("cat".parse().unwrap(), Blinding::random());
    let (mut game, commitment) = GameConfig::default()
        .init_game(players.setter, players.guesser, &secret)
        .unwrap();
    assert!(secret.opens(&commitment));

    players.play(&mut game, &secret, 'c');
    players.play(&mut game, &secret, 'a');
    let events = players.play(&mut game, &secret, 't');

    assert!(matches!(
        events.last(),
        Some(GameEvent::GameEnded { outcome: Outcome::GuesserWins, miss_count: 0 })
    ));
    let view = GameView::of(&game);
    assert_eq!(view.masked().unwrap().to_string(), "cat");
    assert_eq!(view.outcome, Outcome::GuesserWins);
}

#[test]
fn test_cat_loss() {
    let players = Players::new();
    let secret = SetterSecret::new("cat".parse().unwrap(), Blinding::random());
    let config = GameConfig {
        miss_limit: 2,
        ..Default::default()
    };
    let (mut game, _) = config.init_game(players.setter, players.guesser, &secret).unwrap();

    players.play(&mut game, &secret, 'x');
    players.play(&mut game, &secret, 'y');

    assert_eq!(game.miss_count(), 2);
    assert_eq!(game.outcome(), Outcome::GuesserLoses);
    assert_eq!(GameView::of(&game).remaining_lives(), 0);
}

#[test]
fn test_record_survives_publication_between_moves() {
    let players = Players::new();
    let secret = SetterSecret::with_random_blinding("ledger".parse().unwrap());
    let (game, _) = GameConfig::default()
        .init_game(players.setter, players.guesser, &secret)
        .unwrap();

    // The ledger stores the encoded record and decodes it for every move.
    let mut bytes = game.to_bytes().unwrap();
    for c in ['e', 'q', 'l', 'd', 'g', 'r'] {
        let mut game = Game::from_bytes(&bytes).unwrap();
        players.play(&mut game, &secret, c);
        bytes = game.to_bytes().unwrap();
    }

    let game = Game::from_bytes(&bytes).unwrap();
    assert_eq!(game.outcome(), Outcome::GuesserWins);
    assert_eq!(game.miss_count(), 1);
}

#[test]
fn test_setter_cannot_swap_word_midgame() {
    let players = Players::new();
    let secret = SetterSecret::new("cat".parse().unwrap(), Blinding::from_bytes([3; 32]));
    let (mut game, _) = GameConfig::default()
        .init_game(players.setter, players.guesser, &secret)
        .unwrap();

    players.play(&mut game, &secret, 'c');

    let guess = Symbol::from_char('o').unwrap();
    submit_guess(&mut game, &players.guesser, &sign_guess(&players.guesser_key, guess), guess).unwrap();
    let hash_before = game.compute_hash();

    let swapped = SetterSecret::new("cot".parse().unwrap(), secret.blinding);
    let err = verify_guess(
        &mut game,
        &players.setter,
        &swapped.sign_reveal(&players.setter_key),
        &swapped.word,
        &swapped.blinding,
    )
    .unwrap_err();

    assert_eq!(err, ProtocolError::CommitmentMismatch);
    assert_eq!(game.compute_hash(), hash_before);
    assert_eq!(game.turn(), Turn::Setter);

    // The honest reveal still goes through.
    verify_guess(
        &mut game,
        &players.setter,
        &secret.sign_reveal(&players.setter_key),
        &secret.word,
        &secret.blinding,
    )
    .unwrap();
    assert_eq!(game.miss_count(), 1);
}
