use conway::{GameSettings, find_pattern};
use conway_controller::{Controller, Halt, Scheduler, SharedController, TickReport, lock, shared};
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::sleep;

fn blinker(size: usize) -> Result<SharedController, Box<dyn Error>> {
    let mut controller = Controller::new(GameSettings::new(size, size).set_speed(100))?;
    controller.apply_pattern(find_pattern("Blinker").ok_or("no blinker")?);
    Ok(shared(controller))
}

fn generation(controller: &SharedController) -> u64 {
    lock(controller).generation()
}

#[tokio::test(start_paused = true)]
async fn ticks_once_per_period() -> Result<(), Box<dyn Error>> {
    let controller = blinker(5)?;
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(|_| {});
    assert!(lock(&controller).is_running());

    sleep(Duration::from_millis(50)).await;
    assert_eq!(generation(&controller), 0);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(generation(&controller), 3);

    scheduler.stop();
    assert!(!scheduler.is_active());
    assert!(!lock(&controller).is_running());

    sleep(Duration::from_millis(500)).await;
    assert_eq!(generation(&controller), 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stops_itself_when_the_grid_dies() -> Result<(), Box<dyn Error>> {
    let mut lone = Controller::new(GameSettings::new(5, 5))?;
    lone.toggle_cell(2, 2)?;
    let controller = shared(lone);

    let reports: Arc<Mutex<Vec<TickReport>>> = Arc::default();
    let seen = reports.clone();
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(move |report| seen.lock().unwrap().push(*report));

    sleep(Duration::from_millis(550)).await;
    assert!(!scheduler.is_active());
    assert!(!lock(&controller).is_running());
    assert_eq!(generation(&controller), 1);

    let reports = reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].halt, Some(Halt::Extinct));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stopping_the_controller_ends_the_task() -> Result<(), Box<dyn Error>> {
    let controller = blinker(5)?;
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(|_| {});

    sleep(Duration::from_millis(150)).await;
    lock(&controller).stop();
    sleep(Duration::from_millis(500)).await;

    assert_eq!(generation(&controller), 1);
    assert!(!scheduler.is_active());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn starting_twice_does_not_double_the_rate() -> Result<(), Box<dyn Error>> {
    let controller = blinker(5)?;
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(|_| {});
    scheduler.start(|_| {});

    sleep(Duration::from_millis(450)).await;
    assert_eq!(generation(&controller), 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn dropping_the_scheduler_cancels_ticks() -> Result<(), Box<dyn Error>> {
    let controller = blinker(5)?;
    let scheduler = {
        let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
        scheduler.start(|_| {});
        scheduler
    };
    drop(scheduler);

    sleep(Duration::from_millis(500)).await;
    assert_eq!(generation(&controller), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn edits_between_ticks() -> Result<(), Box<dyn Error>> {
    let controller = blinker(9)?;
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(|_| {});

    sleep(Duration::from_millis(150)).await;
    {
        let mut controller = lock(&controller);
        assert_eq!(controller.population(), 3);
        controller.toggle_cell(0, 0)?;
    }

    // The lone corner cell dies on the next tick, the blinker keeps going.
    sleep(Duration::from_millis(100)).await;
    let controller = lock(&controller);
    assert_eq!(controller.generation(), 2);
    assert!(!controller.grid().is_alive(0, 0));
    assert_eq!(controller.population(), 3);
    assert!(controller.is_running());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn restart_after_a_stop() -> Result<(), Box<dyn Error>> {
    let controller = blinker(5)?;
    let mut scheduler = Scheduler::new(controller.clone(), Handle::current());
    scheduler.start(|_| {});
    sleep(Duration::from_millis(150)).await;
    scheduler.stop();

    scheduler.start(|_| {});
    assert!(scheduler.is_active());
    sleep(Duration::from_millis(250)).await;
    assert_eq!(generation(&controller), 3);
    Ok(())
}
