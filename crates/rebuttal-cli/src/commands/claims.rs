//! Claims command implementation.

use super::read_input;
use crate::cli::ClaimsArgs;
use crate::error::Result;
use crate::output::Formatter;
use rebuttal_extractor::ClaimParser;

/// Execute the claims command.
pub fn execute_claims(args: ClaimsArgs, formatter: &Formatter) -> Result<()> {
    let remittance = read_input(&args.remit)?;
    let mut claims = ClaimParser::new()?.parse_all(&remittance);

    if let Some(patient) = &args.patient {
        let total = claims.len();
        claims.retain(|claim| claim.is_for_patient(patient));
        eprintln!(
            "{}",
            formatter.info(&format!("{} of {} claims are for '{}'", claims.len(), total, patient))
        );
    }

    println!("{}", formatter.format_claims(&claims)?);

    Ok(())
}
