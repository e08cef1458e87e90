use super::types::PositiveU64;
use crate::error::{AppError, AppResult};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}
