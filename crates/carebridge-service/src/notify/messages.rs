//! Notification message composition.
//!
//! Composition never fails: any missing or blank related field renders as
//! `"N/A"` so a half-filled profile cannot break a workflow transition.

use carebridge_entity::donation::Donation;
use carebridge_entity::donor::DonorProfile;
use carebridge_entity::orphanage::OrphanageProfile;

/// Render an optional field, defaulting blanks to "N/A".
fn safe(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "N/A",
    }
}

/// Subject and body for the verification-code email.
pub fn verification_code(code: &str, validity_minutes: u64) -> (String, String) {
    (
        "Your CareBridge verification code".to_string(),
        format!(
            "Welcome to CareBridge!\n\n\
             Your verification code is: {code}\n\n\
             The code expires in {validity_minutes} minutes. If you did not \
             request this, you can ignore this message."
        ),
    )
}

/// Subject and body for the "new donation pledged" email to an orphanage.
pub fn donation_created(donation: &Donation, donor: &DonorProfile) -> (String, String) {
    (
        format!("New donation pledged: {}", donation.item_name),
        format!(
            "A donor has pledged a new donation.\n\n\
             Item: {}\n\
             Quantity: {}\n\
             Description: {}\n\n\
             Donor: {}\n\
             Contact: {}\n\
             City: {}\n\n\
             Log in to CareBridge to accept or decline this donation.",
            donation.item_name,
            donation.quantity,
            safe(donation.description.as_deref()),
            donor.full_name,
            safe(Some(&donor.contact_number)),
            safe(donor.city.as_deref()),
        ),
    )
}

/// Subject and body for the acceptance email to a donor.
pub fn donation_accepted(donation: &Donation, orphanage: &OrphanageProfile) -> (String, String) {
    (
        format!("Your donation was accepted: {}", donation.item_name),
        format!(
            "Good news! Your donation has been accepted.\n\n\
             Item: {}\n\
             Quantity: {}\n\n\
             Accepted by: {}\n\
             Address: {}, {}, {} - {}\n\
             Phone: {}\n\n\
             Thank you for supporting CareBridge.",
            donation.item_name,
            donation.quantity,
            orphanage.name,
            safe(Some(&orphanage.address)),
            orphanage.city,
            orphanage.state,
            orphanage.pincode,
            safe(Some(&orphanage.phone_number)),
        ),
    )
}
