use anyhow::Result;
use engine::{GameConfig, Outcome, Phase};
use terminal::clock::ManualClock;
use terminal::session::Session;

fn config() -> GameConfig {
    // Start (8,13); first food five cells to the right at (8,18).
    GameConfig::default().with_seed(17).with_initial_food_offset(5)
}

#[test]
fn ticks_only_when_the_clock_says_so() -> Result<()> {
    let clock = ManualClock::new(0);
    let mut session = Session::new(config(), &clock)?;

    clock.advance(5_000);
    assert!(session.update()?.is_empty());

    assert!(session.handle_key("d"));
    clock.advance(199);
    assert!(session.update()?.is_empty());

    clock.advance(1);
    assert_eq!(session.update()?, vec![Outcome::Continue]);
    assert_eq!(session.last_outcome(), Some(Outcome::Continue));
    Ok(())
}

#[test]
fn reaching_the_first_food_scores() -> Result<()> {
    let clock = ManualClock::new(0);
    let mut session = Session::new(config(), &clock)?;
    session.handle_key("d");

    clock.advance(5 * 200);
    let outcomes = session.update()?;
    assert_eq!(outcomes.len(), 5);
    assert_eq!(outcomes[4], Outcome::FoodEaten { score: 1 });
    assert_eq!(session.state().score(), 1);
    assert_eq!(session.state().snake().len(), 2);
    Ok(())
}

#[test]
fn wall_ends_the_round_and_waits_for_input() -> Result<()> {
    let clock = ManualClock::new(0);
    let mut session = Session::new(config(), &clock)?;
    session.handle_key("w");

    clock.advance(60_000);
    let outcomes = session.update()?;
    assert_eq!(outcomes.len(), 9);
    assert!(matches!(outcomes[8], Outcome::GameOver { final_score: 0, .. }));
    assert_eq!(session.rounds_finished(), 1);
    assert_eq!(session.state().phase(), Phase::GameOver);

    clock.advance(60_000);
    assert!(session.update()?.is_empty());
    Ok(())
}

#[test]
fn restart_cancels_the_schedule() -> Result<()> {
    let clock = ManualClock::new(0);
    let mut session = Session::new(config(), &clock)?;
    session.handle_key("s");
    clock.advance(400);
    assert_eq!(session.update()?.len(), 2);

    session.restart()?;
    assert_eq!(session.state().phase(), Phase::Idle);
    assert_eq!(session.state().snake().len(), 1);
    clock.advance(10_000);
    assert!(session.update()?.is_empty());
    Ok(())
}
