//! Random sweep example.
//!
//! Zeroes a gauge against its end-stop, then moves the needle to random
//! positions with a pause between moves. The host loop keeps running while
//! the needle moves, one step per `update()`.
//!
//! This example uses mock pins, so it runs without real hardware.
//!
//! Run with: `cargo run --example random_sweep`

use std::time::{Duration, Instant};

use gauge_stepper::{port::YieldFn, GaugeMotor, PinPort, DEFAULT_ACCEL_TABLE};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use hardware timer
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Mock output pin for demonstration.
struct MockPin;

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Small xorshift generator, good enough to pick needle positions.
struct XorShift(u32);

impl XorShift {
    fn next_in(&mut self, low: u32, high: u32) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        low + self.0 % (high - low)
    }
}

const MOVES: usize = 5;

fn main() {
    println!("=== Random Sweep Example ===\n");

    let mut yields = 0u32;
    let port = PinPort::new(MockPin, MockPin, MockDelay).with_yield(YieldFn(|| yields += 1));

    let mut gauge = GaugeMotor::builder()
        .name("demo_gauge")
        .port(port)
        .profile(&DEFAULT_ACCEL_TABLE)
        .build()
        .expect("Failed to build gauge");

    println!("Gauge created: {} ({} steps)", gauge.name(), gauge.max_steps());

    // Run the needle against the stops
    let started = Instant::now();
    gauge.zero_default().expect("Zeroing failed");
    println!("Zeroed in {:.2?}", started.elapsed());

    let mut rng = XorShift(0x2545_f491);
    let mut next_move_at: Option<Instant> = None;
    let mut moves = 0;

    loop {
        gauge.update().expect("Pin write failed");

        if !gauge.is_stopped() {
            continue;
        }

        // Plan the pause once the needle has settled
        let Some(at) = next_move_at else {
            if moves == MOVES {
                break;
            }
            let pause = rng.next_in(500, 2000);
            next_move_at = Some(Instant::now() + Duration::from_millis(pause as u64));
            continue;
        };

        if Instant::now() >= at {
            next_move_at = None;
            moves += 1;
            let target = rng.next_in(0, u32::from(gauge.max_steps()));
            println!(
                "Moving to {} ({:.1} degrees)",
                target,
                target as f32 / gauge.steps_per_degree()
            );
            gauge.schedule_move(target as i32);
        }
    }

    println!("\nFinal position: {} steps", gauge.position());
    drop(gauge);
    println!("Yielded {} times", yields);
    println!("\n=== Example Complete ===");
}
