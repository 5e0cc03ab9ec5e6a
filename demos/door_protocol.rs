//! Door Protocol
//!
//! This example models a door whose legal moves are listed in a transition
//! table, with an animation routine bound to some of the moves.
//!
//! Key concepts:
//! - Only registered edges are legal
//! - Enter/execute/exit callbacks per edge
//! - Locking the machine and replaying on unlock
//! - Routines handed to an async runner
//!
//! Run with: RUST_LOG=debug cargo run --example door_protocol

use statecraft::state_enum;
use statecraft::table::{Routine, TransitionRecord};
use statecraft::TableMachineBuilder;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use stillwater::prelude::*;

state_enum! {
    enum Door {
        Closed,
        Open,
    }
}

// Environment the animation routines run against
#[derive(Clone, Default)]
struct Animator {
    frames: Arc<AtomicU32>,
}

fn animate(clip: &'static str) -> impl Fn() -> Routine<Animator> + Send + Sync {
    move || {
        from_fn(move |animator: &Animator| {
            let frame = animator.frames.fetch_add(1, Ordering::SeqCst);
            println!("  [frame {frame}] playing '{clip}'");
            Ok(())
        })
        .boxed()
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Door Protocol ===\n");

    let animator = Animator::default();
    let mut door = TableMachineBuilder::<Door, Animator>::default()
        .initial(Door::Closed)
        .transition(
            Door::Closed,
            Door::Open,
            TransitionRecord::new(|_| {
                println!("  door is open");
                Ok(())
            })
            .on_enter(|t| {
                println!("  enter {t}");
                Ok(())
            })
            .on_exit(|t| {
                println!("  exit {t}");
                Ok(())
            })
            .routine(animate("swing")),
        )
        .transition(
            Door::Open,
            Door::Closed,
            TransitionRecord::new(|_| {
                println!("  door is closed");
                Ok(())
            })
            .routine(animate("slam")),
        )
        .transition(
            Door::Closed,
            Door::Closed,
            TransitionRecord::new(|_| Ok(())).on_enter(|_| {
                println!("  resumed while closed");
                Ok(())
            }),
        )
        .build()
        .unwrap();

    for next in [Door::Open, Door::Open, Door::Closed] {
        println!("advance to {}", next.name());
        if !door.advance(next).unwrap() {
            println!("  refused");
        }
        if let Some(routine) = door.take_routine() {
            routine.run(&animator).await.unwrap();
        }
        door.update().unwrap();
    }

    // Re-seat the door without firing anything, then pause it
    door.initialize(Door::Closed);
    println!("\nlocking");
    door.lock();
    println!("  advance while locked: {}", door.advance(Door::Open).unwrap());
    println!("unlocking");
    println!("  replayed: {}", door.unlock().unwrap());

    println!("\nFinal state: {}", door.state().name());
    println!("Animation frames played: {}", animator.frames.load(Ordering::SeqCst));
    println!("\n=== Example Complete ===");
}
