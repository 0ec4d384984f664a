use crate::convert::{FromDbModel, FromModel};
use cadence_entity::entry::{Impact as DbImpact, Model as EntryModel, Mood as DbMood};
use cadence_model::entry::{Entry, Impact, Mood};

impl FromDbModel<DbImpact> for Impact {
    fn from_db_model(model: DbImpact) -> Self {
        match model {
            DbImpact::Low => Self::Low,
            DbImpact::Medium => Self::Medium,
            DbImpact::High => Self::High,
        }
    }
}

impl FromModel<Impact> for DbImpact {
    fn from_model(model: Impact) -> Self {
        match model {
            Impact::Low => Self::Low,
            Impact::Medium => Self::Medium,
            Impact::High => Self::High,
        }
    }
}

impl FromDbModel<DbMood> for Mood {
    fn from_db_model(model: DbMood) -> Self {
        match model {
            DbMood::Flow => Self::Flow,
            DbMood::Drain => Self::Drain,
            DbMood::Neutral => Self::Neutral,
        }
    }
}

impl FromModel<Mood> for DbMood {
    fn from_model(model: Mood) -> Self {
        match model {
            Mood::Flow => Self::Flow,
            Mood::Drain => Self::Drain,
            Mood::Neutral => Self::Neutral,
        }
    }
}

impl FromDbModel<EntryModel> for Entry {
    fn from_db_model(model: EntryModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            date: model.date,
            impact: Impact::from_db_model(model.impact),
            mood: Mood::from_db_model(model.mood),
            created_at: model.created_at,
        }
    }
}

impl FromModel<Entry> for EntryModel {
    fn from_model(model: Entry) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            date: model.date,
            impact: DbImpact::from_model(model.impact),
            mood: DbMood::from_model(model.mood),
            created_at: model.created_at,
        }
    }
}
