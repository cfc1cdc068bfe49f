#[cfg(test)]
mod tests {
    use crate::core::auth::{
        AuthCollaborator, DASHBOARD_ROUTE, GetStarted, User, handle_get_started,
    };
    use crate::core::content::STATS;
    use crate::core::counter::{COUNTER_DURATION_MS, CounterFormat, CounterState};
    use crate::core::{DEMO_IMAGES, DemoSelection, MagneticState, Offset, OnceLatch, Point, Rect};
    use std::cell::{Cell, RefCell};

    struct Session {
        user: Option<User>,
        logins: Cell<usize>,
    }

    impl AuthCollaborator for Session {
        fn current_user(&self) -> Option<User> {
            self.user.clone()
        }

        fn login(&self) {
            self.logins.set(self.logins.get() + 1);
        }
    }

    #[test]
    fn test_demo_scenario_initial_then_third_thumbnail() {
        let mut selection = DemoSelection::default();
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.current().original, DEMO_IMAGES[0].original);

        selection.select(2).unwrap();
        assert_eq!(selection.index(), 2);
        assert_eq!(selection.current().original, DEMO_IMAGES[2].original);
        assert_eq!(selection.current().processed, DEMO_IMAGES[2].processed);
    }

    #[test]
    fn test_get_started_for_both_session_states() {
        let routes = RefCell::new(Vec::<String>::new());
        let navigate = |route: &str| routes.borrow_mut().push(route.to_string());

        let anonymous = Session {
            user: None,
            logins: Cell::new(0),
        };
        assert_eq!(
            handle_get_started(&anonymous, &navigate),
            GetStarted::BeginLogin
        );
        assert_eq!(anonymous.logins.get(), 1);
        assert!(routes.borrow().is_empty());

        let signed_in = Session {
            user: Some(User {
                id: "42".to_string(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                picture: Some("https://example.com/sam.png".to_string()),
            }),
            logins: Cell::new(0),
        };
        assert_eq!(
            handle_get_started(&signed_in, &navigate),
            GetStarted::OpenDashboard
        );
        assert_eq!(signed_in.logins.get(), 0);
        assert_eq!(*routes.borrow(), vec![DASHBOARD_ROUTE.to_string()]);
    }

    #[test]
    fn test_stats_scroll_scenario() {
        let mut counters_visible = OnceLatch::new();

        // Before the stats block is seen, placeholders are rendered
        let placeholders: Vec<_> = STATS.iter().map(|s| s.placeholder()).collect();
        assert_eq!(placeholders, vec!["0+", "0s", "0%"]);

        // First viewport entry starts the counters from zero
        assert!(counters_visible.fire());
        let mut counters: Vec<_> = STATS
            .iter()
            .map(|stat| {
                let mut counter = CounterState::new(0.0, CounterFormat::default());
                counter.set_value(stat.value, 0.0);
                counter
            })
            .collect();

        // Scrolling away and back does not fire again
        assert!(!counters_visible.fire());
        assert!(!counters_visible.fire());
        assert!(counters_visible.is_shown());

        let rendered: Vec<_> = counters
            .iter_mut()
            .zip(STATS.iter())
            .map(|(counter, stat)| {
                counter.tick(COUNTER_DURATION_MS);
                format!("{}{}", counter.display(), stat.suffix)
            })
            .collect();
        assert_eq!(rendered, vec!["50+", "3s", "100%"]);
    }

    #[test]
    fn test_magnetic_move_then_leave() {
        let rect = Rect::new(0.0, 0.0, 200.0, 60.0);
        let mut state = MagneticState::new();

        let target = state.pointer_move(Point::new(180.0, 50.0), rect, 0.0);
        assert!((target.x - 12.0).abs() < 1e-9);
        assert!((target.y - 3.0).abs() < 1e-9);

        state.pointer_leave(8.0);
        assert_eq!(state.target(), Offset::ZERO);
    }
}
