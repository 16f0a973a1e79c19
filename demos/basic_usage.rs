//! Basic usage of the preset logger in each output format

use logg::prelude::*;
use logg::{info, warn};

fn main() {
    let human = Options::new()
        .component("demo")
        .min_level(LogLevel::Debug)
        .format(FormatType::Human)
        .build();

    human.debug("starting up", &[attr("pid", std::process::id())]);
    info!(human, "listening", "port" => 8080);

    let json = Options::new()
        .sink(Sink::stdout())
        .component("demo")
        .group("request")
        .extra_attribute("region", "us-west")
        .format(FormatType::Json)
        .build();

    info!(json, "request handled", "path" => "/health", "status" => 200);
    warn!(json, "slow request", "elapsed_ms" => 1250);

    let logfmt = Options::new().component("demo").build();
    logfmt.error("shutting down", &[attr("reason", "signal received")]);
}
