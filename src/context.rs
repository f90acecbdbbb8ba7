//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

/// Balance refresh trigger shared by every view that mutates the balance
#[derive(Clone, Copy)]
pub struct BalanceContext {
    /// Bumped after each mutating action - read
    pub refresh_trigger: ReadSignal<u32>,
    /// Bumped after each mutating action - write
    set_refresh_trigger: WriteSignal<u32>,
}

impl BalanceContext {
    pub fn new(refresh_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            refresh_trigger: refresh_trigger.0,
            set_refresh_trigger: refresh_trigger.1,
        }
    }

    /// Ask the banner to re-fetch the balance
    pub fn refresh(&self) {
        self.set_refresh_trigger.update(|v| *v += 1);
    }
}

pub fn use_balance() -> BalanceContext {
    expect_context::<BalanceContext>()
}
