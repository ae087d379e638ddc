//! Profit/loss module - period performance records mirrored from the server.

mod profit_loss_model;

pub use profit_loss_model::{Period, ProfitLossRecord};
