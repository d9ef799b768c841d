use std::io::BufRead;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use placedesk_core::{update, AppState, Msg};

use crate::commands::{self, Command};
use crate::effects::EffectRunner;
use crate::render;

enum Input {
    Line(String),
    Eof,
}

pub fn run() -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone())?;

    let input_rx = spawn_input_loop();

    let mut state = AppState::new();
    dispatch(&mut state, Msg::JobsRequested, &runner);
    println!("{}", commands::HELP);

    loop {
        // Engine completions first, then a repaint if anything changed.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, msg, &runner);
        }
        if state.consume_dirty() {
            render::render(&state.view());
        }

        match input_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(Input::Line(line)) => match commands::parse(&line) {
                Some(Command::Dispatch(msg)) => dispatch(&mut state, msg, &runner),
                Some(Command::Help) => println!("{}", commands::HELP),
                Some(Command::Quit) => break,
                Some(Command::Unknown(reason)) => println!("{reason} (try `help`)"),
                None => {}
            },
            Ok(Input::Eof) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

fn dispatch(state: &mut AppState, msg: Msg, runner: &EffectRunner) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
}

fn spawn_input_loop() -> mpsc::Receiver<Input> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(Input::Line(line)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(Input::Eof);
    });
    rx
}
