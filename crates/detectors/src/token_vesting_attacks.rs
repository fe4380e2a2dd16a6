use vectorguard::brief::{BriefTemplate, Stage};
use vectorguard::catalog::{Severity, Vector, VectorCatalog};
use vectorguard::detector::Detector;

pub const NAME: &str = "token-vesting-attacks";

pub fn detector() -> Detector {
    Detector::new(template(), catalog())
}

fn template() -> BriefTemplate {
    BriefTemplate::new(
        "Comprehensive Token Vesting Attack Vectors Analysis",
        "Perform comprehensive analysis of 5 high-severity attack vectors related to \
         token vesting mechanisms including linear vesting, merkle-based vesting, \
         time-locked vesting, Sablier streams, and LlamaPay protocol.",
    )
    .stage(Stage::new(
        "Discovery Phase",
        [
            "Map vesting contract implementations",
            "Identify vesting calculation logic",
            "Locate withdrawal mechanisms",
            "Find admin functions",
            "Analyze time dependencies",
        ],
    ))
    .stage(
        Stage::titled("Attack Vector Analysis")
            .section(
                "Vesting Calculation Errors",
                [
                    "Check linear vesting math at cliff and completion boundaries",
                    "Verify rounding direction across partial claims",
                ],
            )
            .section(
                "Merkle Vesting Exploits",
                [
                    "Verify claim proofs bind recipient and allocation",
                    "Check double-claim prevention across root updates",
                ],
            )
            .section(
                "Stream Protocol Surfaces",
                [
                    "Sablier: stream rate, cancellation, and recipient handling",
                    "LlamaPay: balance bookkeeping and withdrawal timing",
                ],
            )
            .section(
                "Access Control Flaws",
                [
                    "Check emergency withdrawal and admin override paths",
                    "Verify schedule modification authority",
                ],
            ),
    )
    .require("Vesting Schedule", "The schedule parameters and where the math diverges")
    .with_closing(
        "Vesting bugs redistribute time-locked value; verify claims at every \
         boundary: cliff start, schedule end, cancellation, and root rotation.",
    )
}

fn catalog() -> VectorCatalog {
    VectorCatalog::from_vectors(vec![
        Vector::new(
            "linear-vesting",
            "Linear Vesting Attack",
            Severity::High,
            "Vesting math manipulation enabling early or inflated unlocks.",
        )
        .with_notes([
            "Early unlock exploits",
            "Cliff period bypasses",
            "Vesting schedule manipulation",
        ]),
        Vector::new(
            "merkle-vesting",
            "Merkle Vesting Attack",
            Severity::High,
            "Proof forgery and double claims against merkle allocations.",
        )
        .with_notes([
            "Double claiming exploits",
            "Root update vulnerabilities",
            "Allocation manipulation",
        ]),
        Vector::new(
            "time-locked-vesting",
            "Time-Locked Vesting Attack",
            Severity::High,
            "Lock duration and emergency withdrawal abuse.",
        )
        .with_notes([
            "Time-based unlock exploits",
            "Emergency withdrawal abuse",
            "Admin key vulnerabilities",
        ]),
        Vector::new(
            "sablier-stream",
            "Sablier Stream Attack",
            Severity::High,
            "Stream rate, cancellation, and recipient manipulation.",
        )
        .with_notes([
            "Cancellation griefing",
            "Recipient address spoofing",
            "Token approval exploits",
        ]),
        Vector::new(
            "llamapay-stream",
            "LlamaPay Stream Attack",
            Severity::High,
            "Payment stream interruption and balance calculation exploitation.",
        )
        .with_notes([
            "Balance calculation errors",
            "Withdrawal timing attacks",
            "Protocol fee bypasses",
        ]),
    ])
}
