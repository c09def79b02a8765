use crate::errors::Error;
use crate::types::{SaleConfig, Stage};

/// Fails unless `now` falls inside the window of the current stage.
pub fn require_active_window(config: &SaleConfig, stage: Stage, now: u64) -> Result<(), Error> {
    match stage {
        Stage::PreSale => {
            if now < config.pre_sale_window.start {
                return Err(Error::PreSaleNotStarted);
            }
            if now > config.pre_sale_window.end {
                return Err(Error::PreSaleEnded);
            }
        }
        Stage::Sale => {
            if now < config.sale_window.start {
                return Err(Error::SaleNotStarted);
            }
            if now > config.sale_window.end {
                return Err(Error::SaleEnded);
            }
        }
    }
    Ok(())
}

pub fn has_ended(config: &SaleConfig, now: u64) -> bool {
    now > config.sale_window.end
}

/// Stages only move forward. Re-selecting the current stage is accepted.
pub fn check_transition(current: Stage, next: Stage) -> Result<(), Error> {
    if next < current {
        return Err(Error::InvalidStageTransition);
    }
    Ok(())
}
