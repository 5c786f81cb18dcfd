//! Game logic systems for clock ticking and time expiry

use bevy::prelude::*;
use tracing::{info, warn};

use crate::game::resources::*;

/// System to count down the side to move
///
/// Frame time is converted into whole seconds by [`ClockTicker`]. The running
/// flag is re-checked before every second so that a pause in the middle of a
/// long frame stops the count.
pub fn tick_game_clock(
    time: Res<Time>,
    mut ticker: ResMut<ClockTicker>,
    mut session: ResMut<GameSession>,
    game_over: Res<GameOverState>,
) {
    if game_over.is_game_over() {
        return;
    }

    ticker.sync(session.clock());
    let seconds = ticker.advance(time.delta());

    for _ in 0..seconds {
        if !session.clock().is_running() {
            break;
        }
        session.clock_mut().tick();
        warn_low_time(session.clock());
    }
}

fn warn_low_time(clock: &TurnClock) {
    let side = clock.side_to_move();
    let remaining = clock.seconds_for(side);
    if remaining == 30 || remaining == 10 {
        warn!("[TIMER] {} has {} seconds remaining!", side, remaining);
    }
}

/// System to end the game when a timed player's clock reaches zero
pub fn check_time_expiry(mut session: ResMut<GameSession>, mut game_over: ResMut<GameOverState>) {
    if game_over.is_game_over() {
        return;
    }

    let Some(loser) = session.clock().flagged() else {
        return;
    };

    *game_over = GameOverState::TimeExpired { loser };
    session.clock_mut().freeze();

    info!("[GAME] ========== TIME EXPIRED ==========");
    info!(
        "[GAME] {} - after {} moves",
        game_over.message(),
        session.current_move()
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::game::components::PieceColor;

    fn clock_app(selected: Option<u32>) -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<ClockTicker>()
            .init_resource::<GameOverState>()
            .insert_resource(GameSession::new(selected))
            .add_systems(Update, (tick_game_clock, check_time_expiry).chain());
        app
    }

    fn advance(app: &mut App, millis: u64) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(millis));
        app.update();
    }

    #[test]
    fn test_clock_counts_down_side_to_move() {
        let mut app = clock_app(Some(300));
        app.update();

        for _ in 0..5 {
            advance(&mut app, 1000);
        }

        let clock = app.world().resource::<GameSession>().clock().clone();
        assert_eq!(clock.white_seconds(), 295);
        assert_eq!(clock.black_seconds(), 300);
    }

    #[test]
    fn test_untimed_clock_stays_at_zero() {
        let mut app = clock_app(None);
        for _ in 0..3 {
            advance(&mut app, 1000);
        }

        let clock = app.world().resource::<GameSession>().clock().clone();
        assert_eq!(clock.white_seconds(), 0);
        assert!(!clock.is_running());
        assert!(!app.world().resource::<GameOverState>().is_game_over());
    }

    #[test]
    fn test_paused_clock_does_not_move() {
        let mut app = clock_app(Some(60));
        app.world_mut()
            .resource_mut::<GameSession>()
            .clock_mut()
            .toggle_running();

        advance(&mut app, 3000);

        let clock = app.world().resource::<GameSession>().clock().clone();
        assert_eq!(clock.white_seconds(), 60);
    }

    #[test]
    fn test_time_expiry_ends_game() {
        let mut app = clock_app(Some(2));
        app.update();
        advance(&mut app, 1000);
        advance(&mut app, 1000);

        let state = *app.world().resource::<GameOverState>();
        assert_eq!(
            state,
            GameOverState::TimeExpired {
                loser: PieceColor::White
            }
        );
        assert!(!app.world().resource::<GameSession>().clock().is_running());
    }
}
