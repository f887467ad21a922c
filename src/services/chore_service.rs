use uuid::Uuid;

use crate::ledger::{Chore, ChoreStatus, Flat};

use super::{ServiceError, ServiceResult};

pub struct ChoreService;

impl ChoreService {
    /// Adds a chore, checking any pre-set assignee against the roster.
    pub fn add(flat: &mut Flat, chore: Chore) -> ServiceResult<Uuid> {
        if let Some(assignee) = chore.assigned_to {
            Self::validate_member(flat, assignee)?;
        }
        Ok(flat.add_chore(chore))
    }

    /// Assigns (or reassigns) a chore to a roster member.
    pub fn assign(flat: &mut Flat, id: Uuid, member: Uuid) -> ServiceResult<()> {
        Self::validate_member(flat, member)?;
        let chore = Self::chore_mut(flat, id)?;
        if chore.is_done() {
            return Err(ServiceError::Invalid("Chore is already done".into()));
        }
        chore.assigned_to = Some(member);
        flat.touch();
        Ok(())
    }

    /// Moves a pending chore into progress.
    pub fn start(flat: &mut Flat, id: Uuid) -> ServiceResult<()> {
        let chore = Self::chore_mut(flat, id)?;
        if chore.status != ChoreStatus::Pending {
            return Err(ServiceError::Invalid("Only a pending chore can start".into()));
        }
        chore.status = ChoreStatus::InProgress;
        flat.touch();
        Ok(())
    }

    /// Marks a chore done, from either `Pending` or `InProgress`.
    pub fn complete(flat: &mut Flat, id: Uuid) -> ServiceResult<()> {
        let chore = Self::chore_mut(flat, id)?;
        if chore.is_done() {
            return Err(ServiceError::Invalid("Chore is already done".into()));
        }
        chore.status = ChoreStatus::Done;
        flat.touch();
        Ok(())
    }

    pub fn remove(flat: &mut Flat, id: Uuid) -> ServiceResult<()> {
        let before = flat.chores.len();
        flat.chores.retain(|chore| chore.id != id);
        if flat.chores.len() == before {
            return Err(ServiceError::Invalid("Chore not found".into()));
        }
        flat.touch();
        Ok(())
    }

    pub fn list(flat: &Flat) -> Vec<&Chore> {
        flat.chores.iter().collect()
    }

    fn chore_mut<'a>(flat: &'a mut Flat, id: Uuid) -> ServiceResult<&'a mut Chore> {
        flat.chore_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Chore not found".into()))
    }

    fn validate_member(flat: &Flat, member: Uuid) -> ServiceResult<()> {
        if flat.member(member).is_none() {
            return Err(ServiceError::Invalid(
                "Assignee is not a flat member".into(),
            ));
        }
        Ok(())
    }
}
