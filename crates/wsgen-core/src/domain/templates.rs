//! Built-in HDL templates and the placeholder renderer.
//!
//! Template sources are compile-time strings containing `{{CORE_NAME}}`
//! placeholders. Rendering is literal substitution, so output is a pure
//! function of `(kind, variant, core name)`.

use crate::domain::TemplateVariant;

const CORE_NAME_PLACEHOLDER: &str = "{{CORE_NAME}}";

// ── Render context ───────────────────────────────────────────────────────────

/// The value a template is rendered with: the core name that fills
/// `{{CORE_NAME}}`.
#[derive(Debug, Clone)]
pub struct RenderContext {
    core_name: String,
}

impl RenderContext {
    pub fn new(core_name: impl Into<String>) -> Self {
        Self {
            core_name: core_name.into(),
        }
    }

    /// Replace every `{{CORE_NAME}}` in one pass. Other placeholders, and
    /// braces inside the core name, are left as-is.
    pub fn render(&self, template: &str) -> String {
        template.replace(CORE_NAME_PLACEHOLDER, &self.core_name)
    }
}

// ── Template catalogue ───────────────────────────────────────────────────────

/// The four files a core can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// `rtl/<core>.v`
    DesignStub,
    /// `sim/tb/<core>_tb.sv`
    TestbenchStub,
    /// `sim/env/<core>_env_pkg.sv`
    EnvironmentPackage,
    /// `sim/env/<core>_test.sv`, framework variant only.
    TestClass,
}

impl TemplateKind {
    pub fn file_name(self, core: &str) -> String {
        match self {
            Self::DesignStub => format!("{core}.v"),
            Self::TestbenchStub => format!("{core}_tb.sv"),
            Self::EnvironmentPackage => format!("{core}_env_pkg.sv"),
            Self::TestClass => format!("{core}_test.sv"),
        }
    }

    pub const fn source(self, variant: TemplateVariant) -> &'static str {
        match (self, variant) {
            (Self::DesignStub, _) => DESIGN_STUB,
            (Self::TestbenchStub, TemplateVariant::Basic) => TESTBENCH_BASIC,
            (Self::TestbenchStub, TemplateVariant::Framework) => TESTBENCH_FRAMEWORK,
            (Self::EnvironmentPackage, TemplateVariant::Basic) => ENV_PKG_BASIC,
            (Self::EnvironmentPackage, TemplateVariant::Framework) => ENV_PKG_FRAMEWORK,
            (Self::TestClass, _) => TEST_CLASS,
        }
    }

    pub fn render(self, variant: TemplateVariant, core: &str) -> String {
        RenderContext::new(core).render(self.source(variant))
    }
}

const DESIGN_STUB: &str = "\
module {{CORE_NAME}} (
    input clk,
    input rst_n
);

endmodule
";

const TESTBENCH_BASIC: &str = "\
module {{CORE_NAME}}_tb;
// ----------------------------------------------------------------------------
// Clock generator
// ----------------------------------------------------------------------------
bit clk = 0;
initial
    forever #5 clk = !clk;

// ----------------------------------------------------------------------------
// Reset generator
// ----------------------------------------------------------------------------
bit rst = 0;
wire rst_n = !rst;

initial begin
    @(negedge clk);
    rst = 1;
    @(negedge clk);
    rst = 0;
end

// ----------------------------------------------------------------------------
// DUT
// ----------------------------------------------------------------------------

{{CORE_NAME}} u_{{CORE_NAME}} (.*);

endmodule : {{CORE_NAME}}_tb
";

const TESTBENCH_FRAMEWORK: &str = "\
module {{CORE_NAME}}_tb;
import uvm_pkg::*;
import {{CORE_NAME}}_env_pkg::*;
`include \"uvm_macros.svh\"

// ----------------------------------------------------------------------------
// Clock generator
// ----------------------------------------------------------------------------
bit clk = 0;
initial
    forever #5 clk = !clk;

// ----------------------------------------------------------------------------
// Reset generator
// ----------------------------------------------------------------------------
bit rst = 0;
wire rst_n = !rst;

initial begin
    @(negedge clk);
    rst = 1;
    @(negedge clk);
    rst = 0;
end

// ----------------------------------------------------------------------------
// DUT
// ----------------------------------------------------------------------------

{{CORE_NAME}} u_{{CORE_NAME}} (.*);

// ----------------------------------------------------------------------------
// Test
// ----------------------------------------------------------------------------
initial
    run_test(\"{{CORE_NAME}}_test\");

endmodule : {{CORE_NAME}}_tb
";

// Package identifier kept as `<core>_tb_pkg` for workspaces generated by
// earlier releases.
const ENV_PKG_BASIC: &str = "\
package {{CORE_NAME}}_tb_pkg;
endpackage : {{CORE_NAME}}_tb_pkg
";

const ENV_PKG_FRAMEWORK: &str = "\
package {{CORE_NAME}}_env_pkg;
import uvm_pkg::*;
`include \"uvm_macros.svh\"

`include \"{{CORE_NAME}}_test.sv\"

endpackage : {{CORE_NAME}}_env_pkg
";

const TEST_CLASS: &str = "\
class {{CORE_NAME}}_test extends uvm_test;
    `uvm_component_utils({{CORE_NAME}}_test)

    function new(string name = \"{{CORE_NAME}}_test\", uvm_component parent = null);
        super.new(name, parent);
    endfunction : new

    task run_phase(uvm_phase phase);
        phase.raise_objection(this);
        #100;
        phase.drop_objection(this);
    endtask : run_phase

endclass : {{CORE_NAME}}_test
";
