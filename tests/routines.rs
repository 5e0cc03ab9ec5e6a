//! Driving per-transition routines from an async runner.

use statecraft::builder::TableMachineBuilder;
use statecraft::core::CallbackError;
use statecraft::table::{TableMachine, TransitionRecord};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use stillwater::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Gate {
    Shut,
    Opening,
    Open,
}

#[derive(Clone, Default)]
struct Stage {
    frames: Arc<AtomicUsize>,
    played: Arc<Mutex<Vec<&'static str>>>,
}

fn play(clip: &'static str) -> TransitionRecord<Gate, Stage> {
    TransitionRecord::new(|_| Ok(())).routine(move || {
        from_fn(move |stage: &Stage| {
            stage.frames.fetch_add(1, Ordering::SeqCst);
            stage.played.lock().unwrap().push(clip);
            Ok(())
        })
        .boxed()
    })
}

fn gate() -> TableMachine<Gate, Stage> {
    TableMachineBuilder::<Gate, Stage>::default()
        .initial(Gate::Shut)
        .transition(Gate::Shut, Gate::Opening, play("swing"))
        .transition(Gate::Opening, Gate::Open, TransitionRecord::new(|_| Ok(())))
        .transition(Gate::Open, Gate::Shut, play("slam"))
        .build()
        .unwrap()
}

#[tokio::test]
async fn advance_binds_a_fresh_routine() {
    let stage = Stage::default();
    let mut machine = gate();
    assert!(!machine.has_routine());

    machine.advance(Gate::Opening).unwrap();
    assert!(machine.has_routine());
    let routine = machine.take_routine().unwrap();
    assert!(!machine.has_routine());

    routine.run(&stage).await.unwrap();
    assert_eq!(stage.frames.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn edges_without_routine_clear_the_slot() {
    let stage = Stage::default();
    let mut machine = gate();

    machine.advance(Gate::Opening).unwrap();
    machine.advance(Gate::Open).unwrap();
    assert!(machine.take_routine().is_none());

    machine.advance(Gate::Shut).unwrap();
    machine.take_routine().unwrap().run(&stage).await.unwrap();

    assert_eq!(*stage.played.lock().unwrap(), vec!["slam"]);
}

#[tokio::test]
async fn routine_errors_reach_the_runner() {
    let mut machine = TableMachine::<Gate, ()>::starting_in(Gate::Shut);
    machine
        .register(
            Gate::Shut,
            Gate::Open,
            TransitionRecord::new(|_| Ok(()))
                .routine(|| fail(CallbackError::new("motor stalled")).boxed()),
        )
        .unwrap();

    machine.advance(Gate::Open).unwrap();
    let err = machine.take_routine().unwrap().run(&()).await.unwrap_err();

    assert_eq!(err.message(), "motor stalled");
    assert_eq!(machine.state(), &Gate::Open);
}
