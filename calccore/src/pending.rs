//! The left operand and operator waiting for a right-hand side

use crate::number::Number;
use crate::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    /// Waiting for the right operand.
    Open,
    /// Evaluated by equals; kept on screen as a completed equation.
    Final { right: Number },
}

/// An in-flight computation. The engine stores `Option<Pending>`, so an
/// operator never exists without its left operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pending {
    pub left: Number,
    pub operator: Operator,
    pub stage: Stage,
}

impl Pending {
    pub fn open(left: Number, operator: Operator) -> Self {
        Self {
            left,
            operator,
            stage: Stage::Open,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self.stage, Stage::Final { .. })
    }

    /// `"7 - "` while open, `"7 - 2 ="` once final.
    pub fn text(&self) -> String {
        match self.stage {
            Stage::Open => format!("{} {} ", self.left, self.operator),
            Stage::Final { right } => format!("{} {} {} =", self.left, self.operator, right),
        }
    }
}
