//! A small button registry built on `Function`.
//!
//! Run with `RUST_LOG=callbox=trace cargo run --example callbacks` to see the
//! lifecycle events emitted for each handler.

use std::collections::BTreeMap;

use callbox::Function;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

type Handler = Function<fn(u32) -> String>;

#[derive(Default)]
struct Buttons {
    handlers: BTreeMap<&'static str, Handler>,
}

impl Buttons {
    fn bind(&mut self, name: &'static str, handler: Handler) {
        self.handlers.insert(name, handler);
    }

    fn press(&mut self, name: &'static str, times: u32) -> String {
        match self.handlers.get_mut(name) {
            Some(handler) => match handler.call(times) {
                Ok(message) => message,
                Err(error) => format!("{name}: {error}"),
            },
            None => format!("{name}: no such button"),
        }
    }
}

fn shout(times: u32) -> String {
    "hey".repeat(times as usize)
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "callbox=trace".into()))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut buttons = Buttons::default();

    let mut presses = 0;
    let counter = Handler::new(move |times: u32| {
        presses += times;
        format!("pressed {presses} times so far")
    });

    buttons.bind("shout", Handler::new(shout));
    buttons.bind("count", counter.clone());
    buttons.bind("count-copy", counter);
    buttons.bind("broken", Handler::from_ptr(None));

    for (name, times) in [("shout", 2), ("count", 1), ("count", 4), ("count-copy", 1)] {
        println!("{}", buttons.press(name, times));
    }

    println!("{}", buttons.press("broken", 1));
    println!("{}", buttons.press("missing", 1));
}
