use uuid::Uuid;

use crate::ledger::{normalize_email, Flat, Member};

use super::{ServiceError, ServiceResult};

pub struct RosterService;

impl RosterService {
    /// Adds a member, keeping emails unique within the flat.
    pub fn add(flat: &mut Flat, member: Member) -> ServiceResult<Uuid> {
        let email = normalize_email(&member.email);
        if email.is_empty() {
            return Err(ServiceError::Invalid("Member email is required".into()));
        }
        if flat.member_by_email(&email).is_some() {
            return Err(ServiceError::Invalid(format!(
                "Email {email} is already in the roster"
            )));
        }
        Ok(flat.add_member(member))
    }

    /// Removes a member from the roster.
    ///
    /// Ledgered expenses pin their members: anyone still named as payer or
    /// participant cannot leave, and neither can the owner. Chores
    /// assigned to the departing member become unassigned.
    pub fn remove(flat: &mut Flat, id: Uuid) -> ServiceResult<()> {
        if id == flat.owner {
            return Err(ServiceError::Invalid(
                "The owner cannot leave their own flat".into(),
            ));
        }
        if flat.references_member(id) {
            return Err(ServiceError::Invalid(
                "Member is referenced by ledgered expenses".into(),
            ));
        }
        let before = flat.members.len();
        flat.members.retain(|member| member.id != id);
        if flat.members.len() == before {
            return Err(ServiceError::Invalid("Member not found".into()));
        }
        for chore in &mut flat.chores {
            if chore.assigned_to == Some(id) {
                chore.assigned_to = None;
            }
        }
        flat.touch();
        Ok(())
    }

    pub fn list(flat: &Flat) -> Vec<&Member> {
        flat.members.iter().collect()
    }
}
