//! Demonstrates a per-request context bag passed through handler layers.
//!
//! Each layer reads what earlier layers attached and adds its own values.
//! Tracing output from the dictionary is printed at TRACE level.
//!
//! Run with: cargo run --example request_context

use chrono::{DateTime, Duration, Utc};
use sovran_typedict::{require_or, scope_keys, typed_dict, TypedDictionary};
use std::fmt;

/// Scope for everything attached to an in-flight request
struct RequestScope;

type Context = TypedDictionary<RequestScope>;

scope_keys! {
    RequestScope {
        RECEIVED_AT: DateTime<Utc> = "received_at";
        PATH: String = "path";
        USER: User = "user";
        DEADLINE: DateTime<Utc> = "deadline";
    }
}

#[derive(Debug, Clone)]
struct User {
    id: u64,
    name: String,
}

#[derive(Debug)]
enum HandlerError {
    MissingUser,
    MissingDeadline,
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HandlerError::MissingUser => write!(f, "request has no authenticated user"),
            HandlerError::MissingDeadline => write!(f, "request has no deadline"),
        }
    }
}

impl std::error::Error for HandlerError {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    for path in ["/profile", "/public"] {
        let mut context: Context = typed_dict! {
            RequestScope::RECEIVED_AT => Utc::now(),
            RequestScope::PATH => path.to_string(),
        };

        authenticate(&mut context);
        apply_timeout(&mut context, Duration::milliseconds(250));

        match handle(&context) {
            Ok(body) => println!("200 {}", body),
            Err(e) => println!("401 {}", e),
        }
        println!("context: {:?}\n", context);
    }

    Ok(())
}

fn authenticate(context: &mut Context) {
    let user = match context.get(&RequestScope::PATH).map(String::as_str) {
        Some("/public") => None,
        _ => Some(User {
            id: 42,
            name: "ann".to_string(),
        }),
    };
    context.set(&RequestScope::USER, user);
}

fn apply_timeout(context: &mut Context, timeout: Duration) {
    let deadline = context
        .get(&RequestScope::RECEIVED_AT)
        .map(|received| *received + timeout);
    context.set(&RequestScope::DEADLINE, deadline);
}

fn handle(context: &Context) -> Result<String, HandlerError> {
    let user = require_or(context.get(&RequestScope::USER), || HandlerError::MissingUser)?;
    let deadline = require_or(context.get(&RequestScope::DEADLINE), || {
        HandlerError::MissingDeadline
    })?;
    let remaining = *deadline - Utc::now();

    Ok(format!(
        "hello {} (#{}), {}ms left",
        user.name,
        user.id,
        remaining.num_milliseconds()
    ))
}
