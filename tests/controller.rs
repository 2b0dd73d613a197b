mod common;

mod tests {
    use buzzybee::{Controller, Duration, InputEvent, ModeId, ModeSlot, OverrideState};

    use super::common::{MockTouch, RecordingActuator, RecordingPwm, ScriptedRng};

    type TestController = Controller<RecordingPwm, RecordingActuator, MockTouch, ScriptedRng>;

    fn controller(mode: ModeId) -> TestController {
        Controller::with_mode(
            RecordingPwm::default(),
            RecordingActuator::default(),
            MockTouch::default(),
            ScriptedRng::quiet(),
            mode,
        )
    }

    /// Hold the mode key for two iterations, then release it
    fn tap_mode_key(controller: &mut TestController) {
        controller.touch_mut().mode = true;
        controller.step(10);
        let held = controller.step(10);
        assert_eq!(held.frame.as_array(), [184, 184]);
        controller.touch_mut().mode = false;
        let released = controller.step(10);
        assert_eq!(released.events.as_slice(), &[InputEvent::ModeAdvance]);
    }

    #[test]
    fn test_new_controller_starts_dim_and_quiet() {
        let controller = Controller::new(
            RecordingPwm::default(),
            RecordingActuator::default(),
            MockTouch::default(),
            ScriptedRng::quiet(),
        );
        assert_eq!(controller.mode(), ModeId::Twinkle);
        assert_eq!(controller.pwm().channels, [14, 14]);
        assert_eq!(controller.actuator().history, vec![false]);
        assert!(!controller.is_actuator_on());
    }

    #[test]
    fn test_mode_cycle_on_release_edges() {
        let mut controller = controller(ModeId::Twinkle);

        tap_mode_key(&mut controller);
        assert_eq!(controller.mode(), ModeId::Bounce);
        assert_eq!(controller.pwm().channels, [128, 14]);
        match controller.engine().slot() {
            ModeSlot::Bounce(mode) => assert_eq!(mode.elapsed(), 0),
            other => panic!("unexpected {:?}", other.id()),
        }

        tap_mode_key(&mut controller);
        assert_eq!(controller.mode(), ModeId::Random);
        match controller.engine().slot() {
            ModeSlot::Random(mode) => assert_eq!(mode.elapsed(), 0),
            other => panic!("unexpected {:?}", other.id()),
        }

        tap_mode_key(&mut controller);
        assert_eq!(controller.mode(), ModeId::Twinkle);
        assert_eq!(controller.pwm().channels, [14, 14]);
        match controller.engine().slot() {
            ModeSlot::Twinkle(mode) => {
                assert!(!mode.is_twinkling());
                assert_eq!(mode.position().get(), 0);
            }
            other => panic!("unexpected {:?}", other.id()),
        }
    }

    #[test]
    fn test_holding_mode_key_never_changes_mode() {
        let mut controller = controller(ModeId::Bounce);
        controller.touch_mut().mode = true;
        controller.step(0);
        for tick in 0..1_000 {
            let result = controller.step(tick);
            assert_eq!(result.frame.as_array(), [184, 184]);
            assert_eq!(controller.pwm().channels, [184, 184]);
        }
        assert_eq!(controller.mode(), ModeId::Bounce);
    }

    #[test]
    fn test_buzz_in_bounce_restores_dim_floor() {
        let mut controller = controller(ModeId::Bounce);
        controller.step(0);
        assert_eq!(controller.pwm().channels, [128, 14]);

        controller.touch_mut().actuator = true;
        let pressed = controller.step(0);
        assert_eq!(pressed.events.as_slice(), &[InputEvent::BuzzStart]);
        assert_eq!(controller.pwm().channels, [255, 255]);
        assert!(controller.actuator().on);

        for tick in 0..300 {
            controller.step(tick);
            assert_eq!(controller.pwm().channels, [255, 255]);
            assert!(controller.is_actuator_on());
        }

        controller.touch_mut().actuator = false;
        let released = controller.step(0);
        assert_eq!(released.events.as_slice(), &[InputEvent::BuzzStop]);
        assert_eq!(controller.pwm().channels, [14, 14]);
        assert!(!controller.actuator().on);
        assert_eq!(controller.actuator().history, vec![false, true, false]);
        assert_eq!(controller.mode(), ModeId::Bounce);
    }

    #[test]
    fn test_buzz_release_dims_random_mode() {
        let mut controller = Controller::with_mode(
            RecordingPwm::default(),
            RecordingActuator::default(),
            MockTouch::default(),
            ScriptedRng::new([90, 100], 1),
            ModeId::Random,
        );
        for _ in 0..150 {
            controller.step(0);
        }
        assert_eq!(controller.pwm().channels, [90, 100]);

        controller.touch_mut().actuator = true;
        controller.step(0);
        controller.touch_mut().actuator = false;
        controller.step(0);
        assert_eq!(controller.pwm().channels, [14, 14]);
    }

    #[test]
    fn test_buzz_wins_over_mode_key() {
        let mut controller = controller(ModeId::Twinkle);
        controller.touch_mut().mode = true;
        controller.touch_mut().actuator = true;
        controller.step(0);

        for tick in 0..50 {
            let result = controller.step(tick);
            assert_eq!(result.frame.as_array(), [255, 255]);
        }
        assert_eq!(
            controller.overrides(),
            OverrideState {
                touched: true,
                buzzed: true
            }
        );

        // Mode key release still advances while buzzing
        controller.touch_mut().mode = false;
        let released = controller.step(0);
        assert_eq!(released.events.as_slice(), &[InputEvent::ModeAdvance]);
        assert_eq!(controller.mode(), ModeId::Bounce);
        assert_eq!(released.frame.as_array(), [255, 255]);
        assert_eq!(controller.pwm().channels, [255, 255]);
        assert!(controller.is_actuator_on());

        let result = controller.step(0);
        assert_eq!(result.frame.as_array(), [255, 255]);
    }

    #[test]
    fn test_mode_entry_while_buzzing_keeps_full_brightness() {
        let mut controller = controller(ModeId::Random);
        controller.touch_mut().mode = true;
        controller.touch_mut().actuator = true;
        controller.step(0);
        controller.step(0);

        controller.touch_mut().mode = false;
        let released = controller.step(0);
        assert_eq!(controller.mode(), ModeId::Twinkle);
        assert_eq!(released.frame.as_array(), [255, 255]);
        assert_eq!(controller.pwm().channels, [255, 255]);
        assert!(controller.overrides().buzzed);
        assert!(controller.is_actuator_on());

        match controller.engine().slot() {
            ModeSlot::Twinkle(mode) => {
                assert!(!mode.is_twinkling());
                assert_eq!(mode.position().get(), 0);
            }
            other => panic!("unexpected {:?}", other.id()),
        }

        controller.touch_mut().actuator = false;
        let stopped = controller.step(0);
        assert_eq!(stopped.frame.as_array(), [14, 14]);
        assert!(!controller.is_actuator_on());
    }

    #[test]
    fn test_sleep_duration_follows_mode_key() {
        let mut controller = controller(ModeId::Twinkle);
        assert_eq!(controller.step(0).sleep_duration, Duration::from_millis(1));

        controller.touch_mut().mode = true;
        let result = controller.step(0);
        assert!(result.measured);
        assert_eq!(result.sleep_duration, Duration::from_millis(6));

        controller.touch_mut().complete = false;
        let result = controller.step(0);
        assert!(!result.measured);
        assert_eq!(result.sleep_duration, Duration::from_millis(1));
        assert!(result.events.is_empty());
    }

    #[test]
    fn test_stale_measurement_keeps_rendering() {
        let mut controller = controller(ModeId::Bounce);
        controller.touch_mut().complete = false;
        controller.touch_mut().actuator = true;
        for tick in 0..75 {
            controller.step(tick);
        }
        assert!(!controller.is_actuator_on());
        assert_eq!(controller.pwm().channels, [14, 128]);
        assert_eq!(controller.touch_mut().measurements, 75);
    }
}
