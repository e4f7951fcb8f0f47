use crate::domain::model::{CpfReport, FiscalRegion, GenerationOutcome};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::{CpfError, Result};
use std::io::{self, BufRead, Write};

const RULE: &str =
    "======================================================================";

/// Renders reports in the decorated terminal style: banner, digit
/// breakdown, region info and the educational warning.
pub struct PrettyRenderer;

impl PrettyRenderer {
    fn digit_row(digits: &[u8]) -> String {
        digits
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ReportRenderer for PrettyRenderer {
    fn generated(&self, outcome: &GenerationOutcome) -> Result<String> {
        let report = &outcome.report;
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", RULE));
        out.push_str("               🎲 CPF GENERATED 🎲\n");
        out.push_str(&format!("{}\n\n", RULE));
        out.push_str("📋 Generation breakdown:\n");
        match outcome.requested_region {
            Some(region_digit) => {
                out.push_str(&format!(
                    "   ├─ Random digits (1 to 8): {}\n",
                    Self::digit_row(&report.base_digits[..8])
                ));
                out.push_str(&format!(
                    "   ├─ 9th digit (chosen region): {}\n",
                    region_digit
                ));
            }
            None => {
                out.push_str(&format!(
                    "   ├─ Random digits: {}\n",
                    Self::digit_row(&report.base_digits)
                ));
            }
        }
        out.push_str(&format!(
            "   ├─ First verifier digit: {}\n",
            report.verifiers.first
        ));
        out.push_str(&format!(
            "   └─ Second verifier digit: {}\n\n",
            report.verifiers.second
        ));
        out.push_str(&format!("   📄 Your valid CPF: {}\n\n", report.formatted));
        out.push_str("🗺️  Fiscal region:\n");
        out.push_str(&format!(
            "   └─ 9th digit ({}): {}\n\n",
            report.region.digit, report.region.states
        ));
        out.push_str(&format!("{}\n", RULE));
        out.push_str("💡 The 9th digit marks the fiscal region where the CPF was\n");
        out.push_str("   originally registered, not the current residence.\n");
        out.push_str("⚠️  Generated for educational purposes only.\n");
        out.push_str(&format!("{}\n", RULE));
        Ok(out)
    }

    fn valid(&self, report: &CpfReport) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", RULE));
        out.push_str("               ✅ VALID CPF!\n");
        out.push_str(&format!("{}\n\n", RULE));
        out.push_str(&format!("📄 Formatted CPF: {}\n\n", report.formatted));
        out.push_str("📋 Validation detail:\n");
        out.push_str(&format!(
            "   ├─ First 9 digits: {}\n",
            Self::digit_row(&report.base_digits)
        ));
        out.push_str(&format!(
            "   ├─ 1st verifier digit: {}\n",
            report.verifiers.first
        ));
        out.push_str(&format!(
            "   └─ 2nd verifier digit: {}\n\n",
            report.verifiers.second
        ));
        out.push_str("🗺️  Fiscal region:\n");
        out.push_str(&format!(
            "   └─ 9th digit ({}): {}\n\n",
            report.region.digit, report.region.states
        ));
        out.push_str(&format!("{}\n", RULE));
        out.push_str("💡 This CPF carries correct verifier digits.\n");
        Ok(out)
    }

    fn invalid(&self, input: &str, error: &CpfError) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", RULE));
        out.push_str("               ❌ INVALID CPF!\n");
        out.push_str(&format!("{}\n\n", RULE));
        out.push_str(&format!("📄 Input: {}\n\n", input));
        out.push_str("❌ Rejection reason:\n");
        out.push_str(&format!("   └─ {}\n", error.user_friendly_message()));
        if let CpfError::ChecksumMismatch { supplied, expected } = error {
            out.push_str("\n🔍 Verifier digit comparison:\n");
            out.push_str(&format!("   ├─ Supplied digits: {}\n", supplied));
            out.push_str(&format!("   └─ Correct digits:  {}\n", expected));
        }
        out.push_str(&format!("\n💡 {}\n", error.recovery_suggestion()));
        Ok(out)
    }
}

/// Interactive prompt loop state. The selected region lives here, owned
/// by the caller, instead of in any process-wide variable.
pub struct PromptSession<R: BufRead, W: Write> {
    input: R,
    output: W,
    selected_region: Option<FiscalRegion>,
}

impl PromptSession<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            selected_region: None,
        }
    }

    pub fn selected_region(&self) -> Option<&FiscalRegion> {
        self.selected_region.as_ref()
    }

    /// Show the region menu and read a choice, re-prompting on anything
    /// that is not a digit 0-9. Returns `None` on end of input.
    pub fn choose_region(&mut self) -> Result<Option<FiscalRegion>> {
        loop {
            writeln!(self.output, "\n{}", RULE)?;
            writeln!(self.output, "          🗺️  SELECT THE CPF FISCAL REGION  🗺️")?;
            writeln!(self.output, "{}\n", RULE)?;
            for region in FiscalRegion::all() {
                writeln!(self.output, "   [{}] - {}", region.digit, region.states)?;
            }
            writeln!(self.output, "\n{}", RULE)?;
            write!(self.output, "Region digit (0-9): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<u8>().ok().and_then(FiscalRegion::from_digit) {
                Some(region) => {
                    self.selected_region = Some(region);
                    return Ok(Some(region));
                }
                None => {
                    writeln!(self.output, "❌ Enter a single digit between 0 and 9.")?;
                }
            }
        }
    }

    /// Prompt for a CPF in any punctuation. Returns `None` on end of input.
    pub fn read_cpf(&mut self) -> Result<Option<String>> {
        write!(self.output, "CPF to validate: ")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Yes/no loop. Accepts the Portuguese answers too (S/SIM, N/NAO),
    /// since that is what CPF holders will type. End of input counts as no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.to_uppercase().as_str() {
                "S" | "SIM" | "Y" | "YES" => return Ok(true),
                "N" | "NAO" | "NÃO" | "NO" => return Ok(false),
                _ => writeln!(self.output, "❌ Please answer Y (yes) or N (no).")?,
            }
        }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate;
    use crate::domain::model::CpfReport;
    use std::io::Cursor;

    fn session(input: &str) -> PromptSession<Cursor<Vec<u8>>, Vec<u8>> {
        PromptSession::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn choose_region_accepts_a_digit() {
        let mut session = session("8\n");
        let region = session.choose_region().unwrap().unwrap();
        assert_eq!(region.digit, 8);
        assert_eq!(region.states, "SP (São Paulo)");
        assert_eq!(session.selected_region().unwrap().digit, 8);
    }

    #[test]
    fn choose_region_reprompts_on_junk() {
        let mut session = session("abc\n42\n3\n");
        let region = session.choose_region().unwrap().unwrap();
        assert_eq!(region.digit, 3);
    }

    #[test]
    fn choose_region_ends_on_eof() {
        let mut session = session("");
        assert!(session.choose_region().unwrap().is_none());
        assert!(session.selected_region().is_none());
    }

    #[test]
    fn confirm_understands_both_languages() {
        for yes in ["s\n", "SIM\n", "y\n", "yes\n"] {
            assert!(session(yes).confirm("Again?").unwrap());
        }
        for no in ["n\n", "nao\n", "NO\n", ""] {
            assert!(!session(no).confirm("Again?").unwrap());
        }
        // Junk first, then a real answer.
        assert!(!session("maybe\nn\n").confirm("Again?").unwrap());
    }

    #[test]
    fn pretty_renderer_shows_mismatch_comparison() {
        let err = validate("111.444.777-48").unwrap_err();
        let text = PrettyRenderer.invalid("111.444.777-48", &err).unwrap();
        assert!(text.contains("Supplied digits: 48"));
        assert!(text.contains("Correct digits:  47"));
    }

    #[test]
    fn pretty_renderer_reports_the_region() {
        let report: CpfReport = validate("111.444.777-47").unwrap();
        let text = PrettyRenderer.valid(&report).unwrap();
        assert!(text.contains("111.444.777-47"));
        assert!(text.contains("ES, RJ"));
    }
}
