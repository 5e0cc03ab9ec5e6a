//! Character Modes
//!
//! This example drives a player character through movement modes with a
//! node-driven machine and a simulated host loop.
//!
//! Key concepts:
//! - One long-lived node per mode, owning its own counters
//! - Requesting transitions from inside hooks without reentrancy
//! - Bulk reset of every node
//! - Change listeners
//!
//! Run with: RUST_LOG=debug cargo run --example character_modes

use statecraft::core::CallbackResult;
use statecraft::node::{NodeContext, StateNode};
use statecraft::state_enum;
use statecraft::NodeMachineBuilder;

state_enum! {
    enum Movement {
        Idle,
        Walking,
        Jumping,
    }
}

// Idle starts walking after a few ticks
struct Idle {
    ticks: u32,
}

impl StateNode<Movement> for Idle {
    fn id(&self) -> Movement {
        Movement::Idle
    }

    fn on_enter(&mut self, _ctx: &mut NodeContext<'_, Movement>) -> CallbackResult {
        self.ticks = 0;
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut NodeContext<'_, Movement>) -> CallbackResult {
        self.ticks += 1;
        if self.ticks == 3 {
            ctx.advance(Movement::Walking);
        }
        Ok(())
    }
}

// Walking covers ground, then jumps
struct Walking {
    distance: f32,
}

impl StateNode<Movement> for Walking {
    fn id(&self) -> Movement {
        Movement::Walking
    }

    fn on_update(&mut self, ctx: &mut NodeContext<'_, Movement>) -> CallbackResult {
        self.distance += 1.5;
        if self.distance >= 4.5 {
            ctx.advance(Movement::Jumping);
        }
        Ok(())
    }

    fn on_reset(&mut self) -> CallbackResult {
        self.distance = 0.0;
        Ok(())
    }
}

// Jumping lands immediately, from inside its own on_enter
struct Jumping {
    jumps: u32,
}

impl StateNode<Movement> for Jumping {
    fn id(&self) -> Movement {
        Movement::Jumping
    }

    fn on_enter(&mut self, ctx: &mut NodeContext<'_, Movement>) -> CallbackResult {
        self.jumps += 1;
        println!("  jump #{} (landing queued)", self.jumps);
        ctx.advance(Movement::Idle);
        Ok(())
    }

    fn on_reset(&mut self) -> CallbackResult {
        self.jumps = 0;
        Ok(())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Character Modes ===\n");

    let mut machine = NodeMachineBuilder::new()
        .node(Idle { ticks: 0 })
        .node(Walking { distance: 0.0 })
        .node(Jumping { jumps: 0 })
        .on_change(|mode: &Movement| println!("  -> now {}", mode.name()))
        .initial(Movement::Idle, Movement::Idle)
        .build()
        .unwrap();

    for tick in 1..=8 {
        println!("tick {tick}");
        machine.update().unwrap();
    }

    println!("\nPath so far:");
    for state in machine.history().path() {
        println!("  {}", state.name());
    }

    machine.reset_all().unwrap();
    println!("\nAll nodes reset, still in {:?}", machine.current());

    machine.shutdown().unwrap();
    println!("\n=== Example Complete ===");
}
