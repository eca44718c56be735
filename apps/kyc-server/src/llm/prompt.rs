//! Fixed prompt templates for the structuring and risk stages.

pub const STRUCTURING_SYSTEM: &str = "You are a KYC document analyst.";
pub const FRAUD_SYSTEM: &str = "You are a fraud risk analyst.";
pub const AML_SYSTEM: &str = "You are an AML risk analyst.";

/// Ask for one `Field: Value` line per identity field found in OCR output.
pub fn structuring_prompt(raw_text: &str) -> String {
    format!(
        "Extract the identity details from the following KYC document text:

{raw_text}

- Full name
- Date of birth
- Nationality
- Document type
- Document number
- Issue date and expiry date
- Address

Return one detail per line in this format:
Field: Value
Omit details that are not present. Do not add commentary."
    )
}

pub fn fraud_prompt(kyc_text: &str) -> String {
    format!(
        "Analyze the following KYC document for fraud risk:

{kyc_text}

- Identify inconsistencies in document details.
- Signs of tampering, duplication, or forgery.
- Unusual patterns indicating fraud.
- Provide a fraud risk percentage (0-100%).
- Provide a short explanation.

Return output in this format:
**Fraud Risk:** X%
**Analysis:** Explanation here."
    )
}

pub fn aml_prompt(kyc_text: &str) -> String {
    format!(
        "Analyze the following KYC document for Anti-Money Laundering (AML) risk:

{kyc_text}

- Check for high-risk nationalities (sanctions, high-corruption index).
- Identify Politically Exposed Persons (PEPs).
- Detect duplicate or fake identities.
- Transactions linked to financial crime.
- Provide an AML risk percentage (0-100%).
- Provide a short explanation.

Return output in this format:
**AML Risk:** X%
**Analysis:** Explanation here."
    )
}
