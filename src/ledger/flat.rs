use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    chore::Chore,
    expense::Expense,
    member::{normalize_email, Member},
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Shared flat workspace: the roster plus everything ledgered against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flat {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub owner: Uuid,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub chores: Vec<Chore>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Flat::schema_version_default")]
    pub schema_version: u8,
}

impl Flat {
    /// Creates a flat owned by `owner`, who joins the roster immediately.
    pub fn new(name: impl Into<String>, owner: Member) -> Self {
        let now = Utc::now();
        let owner_id = owner.id;
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            owner: owner_id,
            members: vec![owner],
            expenses: Vec::new(),
            chores: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn add_member(&mut self, member: Member) -> Uuid {
        let id = member.id;
        self.members.push(member);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn add_chore(&mut self, chore: Chore) -> Uuid {
        let id = chore.id;
        self.chores.push(chore);
        self.touch();
        id
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn member(&self, id: Uuid) -> Option<&Member> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn member_by_email(&self, email: &str) -> Option<&Member> {
        let needle = normalize_email(email);
        self.members.iter().find(|member| member.email == needle)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn chore(&self, id: Uuid) -> Option<&Chore> {
        self.chores.iter().find(|chore| chore.id == id)
    }

    pub fn chore_mut(&mut self, id: Uuid) -> Option<&mut Chore> {
        self.chores.iter_mut().find(|chore| chore.id == id)
    }

    /// True while any ledgered expense still names the member as payer or
    /// participant.
    pub fn references_member(&self, id: Uuid) -> bool {
        self.expenses
            .iter()
            .any(|expense| expense.paid_by == id || expense.split_between.contains(&id))
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
