#[cfg(test)]
mod tests {
    use crate::COMPOSER;
    use crate::Color;
    use crate::runtime::*;
    use crate::scope::*;
    use crate::signal::*;
    use crate::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let called = Rc::new(RefCell::new(Vec::new()));

        let called_clone = called.clone();
        let id = sig.subscribe(move |v| called_clone.borrow_mut().push(*v));

        sig.set(42);
        sig.unsubscribe(id);
        sig.set(43);
        assert_eq!(*called.borrow(), vec![42]);
    }

    #[test]
    fn test_subscriber_can_read_signal() {
        let sig = signal(1);
        let seen = Rc::new(Cell::new(0));
        {
            let sig2 = sig.clone();
            let seen = seen.clone();
            sig.subscribe(move |_| seen.set(sig2.get()));
        }
        sig.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_signal_write_invalidates() {
        let _ = take_invalidated();
        let sig = signal(false);
        assert!(!take_invalidated());
        sig.set(true);
        assert!(take_invalidated());
        assert!(!take_invalidated());
    }

    #[test]
    fn test_invalidator_hook_runs_outside_composition() {
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            set_invalidator(move || hits.set(hits.get() + 1));
        }
        let sig = signal(0);
        sig.set(1);
        compose(|| {
            sig.set(2);
            View::new(0, ViewKind::Box)
        });
        clear_invalidator();
        sig.set(3);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_scope_drop_runs_disposers_once() {
        let runs = Rc::new(Cell::new(0));
        {
            let scope = Scope::new();
            let child = scope.child();
            let r = runs.clone();
            child.add_disposer(move || r.set(r.get() + 1));
            let r = runs.clone();
            scope.add_disposer(move || r.set(r.get() + 1));
        }
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_scoped_effect_registers_on_current_scope() {
        let ran = Rc::new(Cell::new(false));
        let scope = Scope::new();
        let r = ran.clone();
        scope.run(|| scoped_effect(move || on_unmount(move || r.set(true))));
        assert_eq!(scope.disposer_count(), 1);
        assert!(!ran.get());
        scope.dispose();
        assert!(ran.get());
    }

    #[test]
    fn test_manual_scheduler_steps() {
        let sched = ManualScheduler::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for ms in [10u64, 25, 40] {
            let f = fired.clone();
            sched.schedule(
                std::time::Duration::from_millis(ms),
                Box::new(move || f.borrow_mut().push(ms)),
            );
        }
        assert_eq!(sched.advance_steps(std::time::Duration::from_millis(10), 3), 2);
        assert_eq!(*fired.borrow(), vec![10, 25]);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn test_emit_all_reaches_every_target() {
        let observer = ManualObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for target in ["a", "b", "b"] {
            let s = seen.clone();
            let cb: IntersectionCallback = Rc::new(move |r: f32| s.borrow_mut().push((target, r)));
            assert!(observer.observe(target, 0.1, cb).is_ok());
        }
        assert_eq!(observer.emit_all(0.5), 3);
        assert_eq!(*seen.borrow(), vec![("a", 0.5), ("b", 0.5), ("b", 0.5)]);
        assert_eq!(observer.delivered(), 3);
    }

    #[test]
    fn test_key_based_remember() {
        reset_composition();

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        // Should return the same instance
        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // Not 100, because key exists
    }

    #[test]
    fn test_unrequested_keyed_slot_is_swept() {
        reset_composition();
        let unmounted = Rc::new(Cell::new(false));

        let build = |show: bool| {
            let unmounted = unmounted.clone();
            move || {
                if show {
                    remember_with_key("panel", move || {
                        scoped_effect(move || on_unmount(move || unmounted.set(true)));
                    });
                }
                View::new(0, ViewKind::Box)
            }
        };

        compose(build(true));
        compose(build(true));
        assert!(!unmounted.get());
        assert_eq!(keyed_slot_count(), 1);

        compose(build(false));
        assert!(unmounted.get());
        assert_eq!(keyed_slot_count(), 0);
    }

    #[test]
    fn test_swept_value_is_dropped() {
        reset_composition();
        struct Flag(Rc<Cell<bool>>);
        impl Drop for Flag {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }
        let dropped = Rc::new(Cell::new(false));
        {
            let d = dropped.clone();
            compose(move || {
                remember_with_key("flag", move || Flag(d));
                View::new(0, ViewKind::Box)
            });
        }
        assert!(!dropped.get());
        compose(|| View::new(0, ViewKind::Box));
        assert!(dropped.get());
    }

    #[test]
    fn test_compose_stamps_preorder_ids() {
        let root = compose(|| {
            View::new(0, ViewKind::Column).with_children(vec![
                View::new(0, ViewKind::Box)
                    .with_children(vec![View::new(0, ViewKind::Row)]),
                View::new(0, ViewKind::Box),
            ])
        });
        assert_eq!(root.id, 1);
        assert_eq!(root.children[0].id, 2);
        assert_eq!(root.children[0].children[0].id, 3);
        assert_eq!(root.children[1].id, 4);
    }

    #[test]
    fn test_order_slots_survive_frames() {
        COMPOSER.with(|c| c.borrow_mut().slots.clear());
        compose(|| {
            let count = remember(|| signal(0));
            count.update(|v| *v += 1);
            View::new(0, ViewKind::Box)
        });
        let mut seen = 0;
        compose(|| {
            let count = remember(|| signal(0));
            seen = count.get();
            View::new(0, ViewKind::Box)
        });
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_host_local_overrides_default() {
        let observer = Rc::new(ManualObserver::new());
        let host = Host::new(Rc::new(ManualScheduler::new()), observer.clone());
        with_host(host, || {
            let h = crate::host();
            h.observer
                .observe("x", 0.5, Rc::new(|_| {}))
                .expect("manual observer accepts registrations");
        });
        assert_eq!(observer.registration_count(), 1);
        assert_eq!(
            crate::host().observer.observe("x", 0.5, Rc::new(|_| {})),
            Err(ObserveError::Unsupported)
        );
    }

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::from_hex("#1E40AF").to_css(), "#1e40af");
        assert_eq!(Color(0, 0, 0, 0).to_css(), "rgba(0, 0, 0, 0.000)");
        let g = LinearGradient::vertical(Color::WHITE, Color::BLACK);
        assert_eq!(g.to_css(), "linear-gradient(180deg, #ffffff, #000000)");
    }

    #[test]
    fn test_config_durations() {
        assert!(duration_from_secs("delay", -0.1).is_err());
        assert!(duration_from_secs("delay", f32::NAN).is_err());
        assert_eq!(
            duration_from_secs("duration", 0.8),
            Ok(std::time::Duration::from_millis(800))
        );
        assert_eq!(
            duration_from_millis("typing", 100),
            Ok(std::time::Duration::from_millis(100))
        );
        assert_eq!(
            duration_from_millis("typing", -1),
            Err(ConfigError::InvalidDuration {
                field: "typing",
                value: -1.0
            })
        );
    }
}
