mod common;

mod tests {
    use buzzybee::mode::RandomMode;
    use buzzybee::{AnimationEngine, ModeId, ModeSlot, OverrideState};

    use super::common::ScriptedRng;

    fn random(engine: &AnimationEngine) -> &RandomMode {
        match engine.slot() {
            ModeSlot::Random(mode) => mode,
            other => panic!("expected random, got {:?}", other.id()),
        }
    }

    #[test]
    fn test_random_redraws_every_150_iterations() {
        let mut rng = ScriptedRng::new([5, 120, 0, 127], 1);
        let mut engine = AnimationEngine::new(ModeId::Random);
        assert_eq!(random(&engine).elapsed(), 0);

        for _ in 1..150 {
            let frame = engine.render(0, OverrideState::default(), &mut rng);
            assert_eq!(frame.as_array(), [14, 14]);
        }
        assert_eq!(rng.calls, 0);

        let frame = engine.render(0, OverrideState::default(), &mut rng);
        assert_eq!(frame.as_array(), [5, 120]);
        assert_eq!(random(&engine).elapsed(), 0);

        for _ in 0..150 {
            engine.render(0, OverrideState::default(), &mut rng);
        }
        assert_eq!(engine.frame().as_array(), [0, 127]);
        assert_eq!(rng.calls, 4);
    }

    #[test]
    fn test_random_values_and_counter_bounded() {
        let mut rng = fastrand::Rng::with_seed(0x00c0_ffee);
        let mut engine = AnimationEngine::new(ModeId::Random);

        for tick in 0..30_000u16 {
            let frame = engine.render(tick, OverrideState::default(), &mut rng);
            assert!(random(&engine).elapsed() < 150);
            assert!(frame.left() < 128);
            assert!(frame.right() < 128);
        }
    }
}
