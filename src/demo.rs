//! Demo configurations on mock hardware
//!
//! - `bop`: the competition robot's run page
//! - `demo`: drive, sensor and counting examples
//!
//! Both wire a fresh [`MockBrick`] each time they are selected;
//! [`demo_on`] wires the demo catalog to a brick the caller keeps.

use std::time::Duration;

use crate::config::ConfigRegistry;
use crate::devices::{ColorSensor, Device, GyroSensor, Motor, Port, TouchSensor};
use crate::error::Result;
use crate::menu::{Catalog, MenuPage};
use crate::platform::mock::MockBrick;
use crate::tasks::{
    println, set_power, stop_all, wait, Counter, RunOnce, Sequence, TaskExt, TimeoutExt,
};

/// Registry holding every demo configuration.
pub fn registry() -> ConfigRegistry {
    let mut registry = ConfigRegistry::new();
    registry.register("bop", bop).register("demo", demo);
    registry
}

/// Devices of the bop robot.
pub fn bop_brick() -> Result<MockBrick> {
    let mut brick = MockBrick::new();
    brick.attach_gyro(Port::In4)?;
    brick.attach_color(Port::In1)?;
    brick.attach_color(Port::In2)?;
    brick.attach_color(Port::In3)?;
    brick.attach_motor(Port::OutA)?;
    brick.attach_motor(Port::OutC)?;
    Ok(brick)
}

/// Catalog of the bop robot.
pub fn bop() -> Result<Catalog> {
    let brick = bop_brick()?;
    let gyro = brick.gyro(Port::In4)?;

    let run1 = Sequence::new()
        .with(RunOnce::new(move || {
            println!("gyro angle: {}", gyro.read(|g| g.angle()));
        }))
        .with(wait(Duration::from_secs(10)).with_timeout(Duration::from_secs(1)))
        .with(Counter::new(10).repeatedly().with_timeout(Duration::from_secs(1)))
        .with(println("Finished Run1"));

    Catalog::new(vec![MenuPage::new("runs")
        .with_task("test", println("Testing"))
        .with_task("run1", run1)])
}

/// Devices of the demo robot.
pub fn demo_brick() -> Result<MockBrick> {
    let mut brick = MockBrick::new();
    brick.attach_motor(Port::OutA)?;
    brick.attach_motor(Port::OutD)?;
    brick.attach_color(Port::In3)?;
    brick.attach_touch(Port::In1)?;
    Ok(brick)
}

/// Catalog of the demo robot.
pub fn demo() -> Result<Catalog> {
    demo_on(&demo_brick()?)
}

/// Demo catalog wired to an existing brick.
///
/// `brick` needs motors on OutA and OutD, a color sensor on In3 and a touch
/// sensor on In1, as [`demo_brick`] attaches.
pub fn demo_on(brick: &MockBrick) -> Result<Catalog> {
    let left = brick.motor(Port::OutA)?;
    let right = brick.motor(Port::OutD)?;
    let color = brick.color(Port::In3)?;
    let touch = brick.touch(Port::In1)?;

    let forward = set_power(&left, 50.0)?
        .alongside(set_power(&right, 50.0)?)
        .with_timeout(Duration::from_secs(2));

    let spin = set_power(&left, 40.0)?
        .alongside(set_power(&right, -40.0)?)
        .with_timeout(Duration::from_millis(750));

    let bumper = touch.clone();
    let to_wall = set_power(&left, 30.0)?
        .alongside(set_power(&right, 30.0)?)
        .until(move || bumper.is_pressed())
        .with_timeout(Duration::from_secs(5));

    let line = color.clone();
    let on_line = set_power(&left, 20.0)?
        .with_timeout(Duration::from_secs(1))
        .only_if(move || line.read(|c| c.reflection()) > 50.0);

    let motors: Vec<Device<dyn Motor>> = brick.motors().into_iter().map(Into::into).collect();
    let stop = RunOnce::new(move || stop_all(&motors));

    let report = RunOnce::new(move || {
        println!(
            "left {:.1} right {:.1} reflection {:.1}",
            left.read(|m| m.position()),
            right.read(|m| m.position()),
            color.read(|c| c.reflection()),
        );
    });

    let counting = Counter::new(5)
        .then(wait(Duration::from_millis(500)))
        .then(Counter::new(3))
        .when_done(|interrupted| {
            crate::log_info!("counting finished (interrupted: {})", interrupted);
        });

    let race = Counter::new(50)
        .race_with(wait(Duration::from_millis(300)))
        .then(println("race over"));

    Catalog::new(vec![
        MenuPage::new("drive")
            .with_task("forward", forward)
            .with_task("spin", spin)
            .with_task("to wall", to_wall)
            .with_task("on line", on_line)
            .with_task("stop", stop),
        MenuPage::new("info")
            .with_task("report", report)
            .with_task("hello", println("Hello from ev3kit")),
        MenuPage::new("count")
            .with_task("counting", counting)
            .with_task("forever", Counter::new(3).repeatedly())
            .with_task("race", race),
    ])
}
