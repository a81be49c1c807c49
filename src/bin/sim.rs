use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use crossbeam_channel::{Receiver, Sender};
use std::{
    env,
    io::Write,
    thread,
    time::{Duration, Instant},
};

use drone_flyer::{
    plugins::DronePlugin,
    protocol::{Command, ControlMessage},
    resources::{SessionConfig, SessionEndpoint, SessionLink, UpdateMode},
};

/// How often the script refreshes its control sample.
const SEND_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Resource)]
struct ScriptFinished(Receiver<()>);

fn script() -> Vec<(&'static str, f64, ControlMessage)> {
    vec![
        ("takeoff", 2.0, ControlMessage::new(1.0, 0.0, 0.0, 0.0)),
        ("hover", 3.0, ControlMessage::new(0.5, 0.0, 0.0, 0.0)),
        ("forward", 3.0, ControlMessage::new(0.5, -0.6, 0.0, 0.2)),
        ("hover", 2.0, ControlMessage::new(0.5, 0.0, 0.0, 0.0)),
        ("land", 4.0, ControlMessage::new(0.0, 0.0, 0.0, 0.0)),
    ]
}

fn run_script(endpoint: SessionEndpoint, finished: Sender<()>) {
    let started = Instant::now();
    for (phase, seconds, message) in script() {
        info!("Script phase '{}' for {:.1}s", phase, seconds);
        let phase_start = Instant::now();
        while phase_start.elapsed().as_secs_f64() < seconds {
            if !endpoint.send(Command::Control(message)) {
                return;
            }
            thread::sleep(SEND_INTERVAL);
        }
    }
    endpoint.send(Command::Ping {
        timestamp: started.elapsed().as_millis() as u64,
    });
    // Let the pong and the last frames drain
    thread::sleep(Duration::from_millis(200));
    let _ = finished.send(());
}

fn print_responses(endpoint: SessionEndpoint) {
    let stdout = std::io::stdout();
    for response in endpoint.responses().iter() {
        match response.encode() {
            Ok(line) => {
                let mut out = stdout.lock();
                if writeln!(out, "{}", line).is_err() {
                    break;
                }
            }
            Err(e) => warn!("Could not encode response: {}", e),
        }
    }
}

fn exit_when_finished(finished: Res<ScriptFinished>, mut exit: EventWriter<AppExit>) {
    if finished.0.try_recv().is_ok() {
        info!("Script complete, shutting down");
        exit.send(AppExit::Success);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match env::args().nth(1) {
        Some(path) => SessionConfig::load(&path)?,
        None => SessionConfig::default(),
    };
    config.update_mode = UpdateMode::RealTime;
    config.external_control = true;
    config.validate()?;

    let (link, endpoint) = SessionLink::pair();
    let (finished_tx, finished_rx) = crossbeam_channel::bounded(1);

    let script_endpoint = endpoint.clone();
    let script_thread = thread::spawn(move || run_script(script_endpoint, finished_tx));
    let printer_thread = thread::spawn(move || print_responses(endpoint));

    let exit = App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                config.timestep,
            ))),
            LogPlugin::default(),
            DronePlugin::new(config),
        ))
        .insert_resource(link)
        .insert_resource(ScriptFinished(finished_rx))
        .add_systems(Update, exit_when_finished)
        .run();

    if script_thread.join().is_err() {
        return Err("script thread panicked".into());
    }
    if printer_thread.join().is_err() {
        return Err("printer thread panicked".into());
    }

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(format!("simulation exited with code {}", code).into()),
    }
}
