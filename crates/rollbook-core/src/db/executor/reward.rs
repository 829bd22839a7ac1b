use crate::{
    db::executor::{Context, ExecutorError},
    error::InternalError,
};

/// Students per salary block in the reward formula.
pub const BLOCK_SIZE: u64 = 4;

/// Block-based salary for one teacher's roster size.
///
/// Truncating integer division at every step; a roster smaller than a
/// block still earns its proportional share of hundredths.
#[must_use]
pub const fn block_salary(student_count: u64, salary_per_block: u64) -> u64 {
    let blocks = student_count.saturating_mul(100) / BLOCK_SIZE;

    blocks.saturating_mul(salary_per_block / 100)
}

///
/// RewardExecutor
///
/// Pay-rate configuration. The salary computation itself is a read-only
/// query; see `db::query::teacher_salary`.
///

pub struct RewardExecutor<'a> {
    ctx: Context<'a>,
}

impl<'a> RewardExecutor<'a> {
    pub(crate) const fn new(ctx: Context<'a>) -> Self {
        Self { ctx }
    }

    /// Install a new per-block pay rate.
    pub fn change_salary_per_block(self, salary: u64) -> Result<(), InternalError> {
        if salary == 0 {
            return Err(ExecutorError::ZeroSalary.into());
        }

        self.ctx.state.pay.salary_per_block = salary;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_is_proportional_in_hundredths_of_a_block() {
        // Exactly one block.
        assert_eq!(block_salary(4, 100), 100);
        // A block and a quarter.
        assert_eq!(block_salary(5, 100), 125);
        // No students, no salary.
        assert_eq!(block_salary(0, 100), 0);
    }

    #[test]
    fn rate_truncates_below_one_hundred() {
        // salary_per_block below 100 truncates to zero hundredths.
        assert_eq!(block_salary(8, 99), 0);
        assert_eq!(block_salary(8, 250), 400);
    }
}
