#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the evidence-guard binary.
#[macro_export]
macro_rules! evidence_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("evidence-guard"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes the discoverable `.evidence-guard.toml` suite.
    pub fn create_suite(&self, content: &str) {
        self.create_file(".evidence-guard.toml", content);
    }

    /// Writes the invoice model and service sources used by [`INVOICE_SUITE`].
    pub fn create_invoice_sources(&self) {
        self.create_file(
            "lib/billing/invoice.dart",
            "class Invoice extends Equatable {\n  final String tenantId;\n  final InvoiceStatus status;\n}\n\nenum InvoiceStatus { draft, sent, paid }\n",
        );
        self.create_file(
            "lib/billing/invoice_service.dart",
            "class InvoiceService {\n  Future<Invoice> create(Invoice invoice) async {}\n  Future<void> markAsSent(String id) async {}\n}\n",
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One passing hard test, one soft test at 60% coverage, one test reading a missing file.
pub const INVOICE_SUITE: &str = r#"
version = "1"

[groups.invoice_model]
class_definition = "class Invoice extends Equatable"
tenant = "final String tenantId"
status_enum = { pattern = "enum\\s+InvoiceStatus", mode = "regex" }

[groups.invoice_service]
service = "class InvoiceService"
create = "Future<Invoice> create"
mark_sent = "markAsSent"
mark_paid = "markAsPaid"
cancel = "cancelInvoice"
refund = "refundInvoice"
list = "listInvoices"

[[tests]]
name = "Invoice Model"
artifacts = ["lib/billing/invoice.dart"]
groups = ["invoice_model"]
policy = "hard"

[[tests]]
name = "Invoice Service"
artifacts = ["lib/billing/invoice_service.dart"]
groups = ["invoice_service"]
policy = "soft"
warn_threshold = 70.0

[[tests]]
name = "Missing File"
artifacts = ["missing.txt"]
policy = "hard"

[tests.checks]
anything = "x"
"#;

/// A suite whose every test passes against [`TestFixture::create_invoice_sources`].
pub const PASSING_SUITE: &str = r#"
[[tests]]
name = "Invoice Model"
artifacts = ["lib/billing/invoice.dart"]
policy = "hard"

[tests.checks]
class_definition = "class Invoice extends Equatable"
tenant = "final String tenantId"
"#;
