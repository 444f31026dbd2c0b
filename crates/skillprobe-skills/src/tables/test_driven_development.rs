//! Canned answers for the `test-driven-development` skill

use crate::rules::{Predicate, RuleTable};

/// Directory name of the skill
pub const IDENTITY: &str = "test-driven-development";

/// Reply for requests to implement new code
pub const IMPLEMENTATION_FLOW: &str = "Following TDD principles, I'll write a failing test before any implementation code.

RED: Write one small test that describes the behavior the function needs. Run it and confirm it fails for the expected reason, not because of a typo or missing import.

GREEN: Write the minimal code that makes the test pass. Hard-coding is fine at this stage; the next test will force the real logic.

REFACTOR: With the test green, clean up names and remove duplication. Run the tests after every change.

Then repeat the cycle for the next behavior until the function is complete.";

/// Reply for bug reports and fixes
pub const BUG_FIX_FLOW: &str = "Following TDD principles, I'll reproduce the bug with a failing test before changing any code.

RED: Write a test that exercises the exact input that triggers the bug and asserts the correct behavior. Watch it fail; this proves the test actually captures the bug.

GREEN: Apply the smallest fix that makes the test pass without breaking the rest of the suite.

REFACTOR: Tidy the fix if needed while keeping everything green.

The new test stays in the suite as a regression guard so this bug cannot quietly come back.";

/// Reply for working on untested legacy code
pub const LEGACY_CODE: &str = "Legacy code without tests needs a safety net before it can change.

1. Write characterization tests that pin down what the code does today, even where that behavior looks wrong.
2. Find a seam (a parameter, an interface, an extracted function) so the code you need to touch can run under test.
3. Once the area is covered, switch to the normal cycle for the new behavior. RED: a failing test for the change. GREEN: the minimal change. REFACTOR: clean up with the tests green.

Only change the code you have covered; widen the net one test at a time.";

/// Reply when asked to skip tests
pub const ANTI_SKIP: &str = "I won't skip the tests. Writing the test first is the core of test-driven development: code written without a failing test has never been shown to work, and tests added afterwards tend to confirm whatever the code happens to do.

Let's keep it small instead. Write one failing test for the most important behavior (RED), make it pass with minimal code (GREEN), then refactor. It costs a few minutes now and saves debugging later.";

/// Reply when no more specific rule matches
pub const TDD_CYCLE: &str = "Test-driven development works in a short, repeating cycle:

1. RED: write a failing test for the next small piece of behavior.
2. GREEN: write the minimal code to make it pass.
3. REFACTOR: improve the design while keeping all tests green.

Never write production code without a failing test that demands it. Tell me what you're building and I'll start with the first test.";

/// Build the rule table
pub fn table() -> RuleTable {
    RuleTable::new(TDD_CYCLE)
        .rule(
            "implementation",
            Predicate::any_of(&["implement", "function"]),
            IMPLEMENTATION_FLOW,
        )
        .rule("bug-fix", Predicate::any_of(&["bug", "fix"]), BUG_FIX_FLOW)
        .rule("legacy", Predicate::contains("legacy"), LEGACY_CODE)
        .rule("skip", Predicate::contains("skip"), ANTI_SKIP)
}
