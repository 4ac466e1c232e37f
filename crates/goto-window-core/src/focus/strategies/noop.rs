use crate::focus::traits::FocusStrategy;

/// Platforms where the host's own focus calls are enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStrategy;

impl FocusStrategy for NoOpStrategy {
    fn name(&self) -> &'static str {
        "no_op"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_strategy_name() {
        assert_eq!(NoOpStrategy.name(), "no_op");
    }
}
