// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! One-shot async lookups against several servers at once, strictly validated.
//!
//! Run with: `cargo run -p ntp_stamp-client --example async_request --features tokio -- [server:port ...]`

use std::time::Duration;

use stamp_client::async_ntp::request_datetime_with;
use stamp_client::{TimestampStyle, Validation};
use tokio::task::JoinSet;

const DEFAULT_SERVERS: [&str; 3] = ["time.nist.gov:123", "time-a-g.nist.gov:123", "pool.ntp.org:123"];

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut servers: Vec<String> = std::env::args().skip(1).collect();
    if servers.is_empty() {
        servers = DEFAULT_SERVERS.iter().map(|s| s.to_string()).collect();
    }

    let mut lookups = JoinSet::new();
    for server in servers {
        lookups.spawn(async move {
            let result =
                request_datetime_with(server.as_str(), Duration::from_secs(5), Validation::Strict)
                    .await;
            (server, result)
        });
    }

    // Printed in completion order.
    while let Some(joined) = lookups.join_next().await {
        let Ok((server, result)) = joined else {
            continue;
        };
        match result {
            Ok(dt) => println!("{server:>24}  {}", dt.display(TimestampStyle::Iso8601)),
            Err(e) => println!("{server:>24}  failed: {e}"),
        }
    }
}
