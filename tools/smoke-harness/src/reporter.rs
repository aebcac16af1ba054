//! Check result reporter — PASS/FAIL lines and a summary.

use anyhow::Result;

pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, name: &str, result: Result<()>) {
        match result {
            Ok(()) => {
                self.passed += 1;
                println!("PASS  {name}");
            }
            Err(e) => {
                self.failed += 1;
                println!("FAIL  {name}");
                println!("        error: {e:#}");
            }
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
