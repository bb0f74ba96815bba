// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

pub mod routes;
pub mod server;
pub mod state;

// Export commonly used items
pub use server::{create_app, start_server};
pub use state::AppState;
