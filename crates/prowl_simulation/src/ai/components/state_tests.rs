//! Tests for AgentState classification and patrol timers.

#[cfg(test)]
mod tests {
    use super::super::patrol::PatrolWait;
    use super::super::state::{classify, AgentState, Ranges};

    const RANGES: Ranges = Ranges {
        attack: 1.5,
        chase: 5.0,
    };

    #[test]
    fn test_agent_state_default() {
        assert_eq!(AgentState::default(), AgentState::Search);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(0.0, RANGES), AgentState::Attack);
        assert_eq!(classify(1.5, RANGES), AgentState::Attack);
        assert_eq!(classify(1.500_001, RANGES), AgentState::Chase);
        assert_eq!(classify(5.0, RANGES), AgentState::Chase);
        assert_eq!(classify(5.000_001, RANGES), AgentState::Search);
        assert_eq!(classify(10.0, RANGES), AgentState::Search);
    }

    #[test]
    fn test_classify_never_idle() {
        // Прогоняем сетку дистанций: Idle классификация не выдаёт
        let mut distance = 0.0;
        while distance < 20.0 {
            let state = classify(distance, RANGES);
            assert_ne!(state, AgentState::Idle);

            let expected = if distance <= RANGES.attack {
                AgentState::Attack
            } else if distance <= RANGES.chase {
                AgentState::Chase
            } else {
                AgentState::Search
            };
            assert_eq!(state, expected, "distance {}", distance);

            distance += 0.05;
        }
    }

    #[test]
    fn test_classify_equal_ranges_skips_chase() {
        let ranges = Ranges {
            attack: 2.0,
            chase: 2.0,
        };
        assert_eq!(classify(2.0, ranges), AgentState::Attack);
        assert_eq!(classify(2.1, ranges), AgentState::Search);
    }

    #[test]
    fn test_patrol_wait_timer() {
        let mut wait = PatrolWait::new(2.0);
        assert!(!wait.tick(0.5));
        assert!(!wait.tick(0.5));
        assert!(!wait.tick(0.5));
        assert_eq!(wait.remaining, 0.5);
        assert!(wait.tick(0.5));
        assert!(wait.tick(0.5)); // остаётся завершённым
        assert_eq!(wait.remaining, 0.0);
    }
}
