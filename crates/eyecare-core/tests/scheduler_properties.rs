//! Property tests for scheduler invariants.

use eyecare_core::{BreakScheduler, Phase, SchedulerConfig, SchedulerSettings};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Tick,
    Pause,
    Resume,
    Skip,
    Reconfigure(SchedulerSettings),
}

fn settings_strategy() -> impl Strategy<Value = SchedulerSettings> {
    (0u64..40, 0u64..15, 0u64..30, 0u32..6).prop_map(|(work, short, long, every)| {
        SchedulerSettings {
            work_duration_seconds: work,
            short_break_seconds: short,
            long_break_seconds: long,
            breaks_per_long_break: every,
        }
    })
}

fn valid_config_strategy() -> impl Strategy<Value = SchedulerConfig> {
    (1u64..40, 1u64..15, 1u64..30, 1u32..6)
        .prop_map(|(w, s, l, n)| SchedulerConfig::new(w, s, l, n).unwrap())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        10 => Just(Op::Tick),
        1 => Just(Op::Pause),
        2 => Just(Op::Resume),
        1 => Just(Op::Skip),
        1 => settings_strategy().prop_map(Op::Reconfigure),
    ]
}

proptest! {
    #[test]
    fn initial_state_is_working_and_full(config in valid_config_strategy()) {
        let s = BreakScheduler::new(config);
        let snap = s.snapshot();
        prop_assert_eq!(snap.phase, Phase::Working);
        prop_assert_eq!(snap.remaining_seconds, config.work_duration_seconds());
        prop_assert_eq!(snap.break_count, 0);
        prop_assert!(snap.running);
    }

    #[test]
    fn remaining_stays_within_phase_duration(
        config in valid_config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..300),
    ) {
        let mut s = BreakScheduler::new(config);
        let mut last_count = 0;
        for op in ops {
            let phase_before = s.phase();
            let count_before = s.break_count();
            match op {
                Op::Tick => { s.tick(); }
                Op::Pause => { s.pause(); }
                Op::Resume => { s.resume(); }
                Op::Skip => { s.skip(); }
                Op::Reconfigure(settings) => {
                    let before = (*s.config(), s.state());
                    if s.reconfigure(settings).is_err() {
                        prop_assert_eq!((*s.config(), s.state()), before);
                    }
                }
            }

            prop_assert!(s.remaining_seconds() <= s.phase_duration());
            prop_assert!(s.break_count() >= last_count);
            last_count = s.break_count();

            // break_count moves only when leaving Working.
            if s.break_count() != count_before {
                prop_assert_eq!(phase_before, Phase::Working);
                prop_assert!(s.phase().is_break());
                prop_assert_eq!(s.break_count(), count_before + 1);
            }
        }
    }

    #[test]
    fn escalation_rule_holds(config in valid_config_strategy(), breaks in 1u64..30) {
        let mut s = BreakScheduler::new(config);
        for _ in 0..breaks {
            s.skip(); // into a break
            let expected = if s.break_count() % u64::from(config.breaks_per_long_break()) == 0 {
                Phase::LongBreak
            } else {
                Phase::ShortBreak
            };
            prop_assert_eq!(s.phase(), expected);
            prop_assert_eq!(s.remaining_seconds(), config.duration_for(expected));
            s.skip(); // back to work
        }
        prop_assert_eq!(s.break_count(), breaks);
    }

    #[test]
    fn paused_ticks_are_inert(config in valid_config_strategy(), warmup in 0usize..20, ticks in 0usize..50) {
        let mut s = BreakScheduler::new(config);
        for _ in 0..warmup {
            s.tick();
        }
        s.pause();
        let before = s.state();
        for _ in 0..ticks {
            s.tick();
        }
        prop_assert_eq!(s.state(), before);
    }

    #[test]
    fn reconfigure_preserves_elapsed_clamped(
        config in valid_config_strategy(),
        elapsed in 0u64..40,
        new_work in 1u64..60,
    ) {
        let mut s = BreakScheduler::new(config);
        let elapsed = elapsed.min(config.work_duration_seconds());
        for _ in 0..elapsed {
            s.tick();
        }
        let settings = SchedulerSettings {
            work_duration_seconds: new_work,
            ..SchedulerSettings::from(config)
        };
        s.reconfigure(settings).unwrap();
        prop_assert_eq!(s.remaining_seconds(), new_work.saturating_sub(elapsed));
    }
}
