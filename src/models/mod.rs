use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldErrors;

/// Member row from the Members table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// Workout session row from the WorkoutSessions table.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkoutSession {
    pub session_id: i64,
    pub member_id: i64,
    pub session_date: NaiveDate,
    pub session_time: String,
    pub activity: String,
}

/// Session fields returned by the member-name join (no member columns).
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MemberSessionRow {
    pub session_id: i64,
    pub session_date: NaiveDate,
    pub session_time: String,
    pub activity: String,
}

/// Validated member payload. `id` is server-assigned and rejected on input.
#[derive(Debug, PartialEq)]
pub struct NewMember {
    pub name: String,
    pub age: i64,
}

impl NewMember {
    pub fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut decoder = Decoder::new(raw, &["name", "age"])?;
        let name = decoder.str_field("name");
        let age = decoder.int_field("age");

        match (name, age) {
            (Some(name), Some(age)) if decoder.errors.is_empty() => Ok(NewMember { name, age }),
            _ => Err(decoder.errors),
        }
    }
}

/// Validated workout session payload. `session_id` is server-assigned and
/// rejected on input.
#[derive(Debug, PartialEq)]
pub struct NewWorkoutSession {
    pub member_id: i64,
    pub session_date: NaiveDate,
    pub session_time: String,
    pub activity: String,
}

impl NewWorkoutSession {
    pub fn decode(raw: &Value) -> Result<Self, FieldErrors> {
        let mut decoder = Decoder::new(
            raw,
            &["member_id", "session_date", "session_time", "activity"],
        )?;
        let member_id = decoder.int_field("member_id");
        let session_date = decoder.date_field("session_date");
        let session_time = decoder.str_field("session_time");
        let activity = decoder.str_field("activity");

        match (member_id, session_date, session_time, activity) {
            (Some(member_id), Some(session_date), Some(session_time), Some(activity))
                if decoder.errors.is_empty() =>
            {
                Ok(NewWorkoutSession {
                    member_id,
                    session_date,
                    session_time,
                    activity,
                })
            }
            _ => Err(decoder.errors),
        }
    }
}

/// Pulls typed values out of a JSON object, accumulating one message list
/// per failing field so a single 400 reports every problem at once.
struct Decoder<'a> {
    object: &'a serde_json::Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Decoder<'a> {
    fn new(raw: &'a Value, known: &[&str]) -> Result<Self, FieldErrors> {
        let Some(object) = raw.as_object() else {
            let mut errors = FieldErrors::new();
            errors.insert("_schema".to_string(), vec!["Invalid input type.".to_string()]);
            return Err(errors);
        };

        let mut decoder = Decoder {
            object,
            errors: FieldErrors::new(),
        };
        // Fields outside the schema (including server-assigned ids) are rejected
        for key in object.keys() {
            if !known.contains(&key.as_str()) {
                decoder.push(key, "Unknown field.");
            }
        }
        Ok(decoder)
    }

    fn push(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    fn str_field(&mut self, name: &str) -> Option<String> {
        match self.object.get(name) {
            None => {
                self.push(name, "Missing data for required field.");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.push(name, "Not a valid string.");
                None
            }
        }
    }

    fn int_field(&mut self, name: &str) -> Option<i64> {
        match self.object.get(name) {
            None => {
                self.push(name, "Missing data for required field.");
                None
            }
            Some(value) => match value.as_i64() {
                Some(n) => Some(n),
                None => {
                    self.push(name, "Not a valid integer.");
                    None
                }
            },
        }
    }

    fn date_field(&mut self, name: &str) -> Option<NaiveDate> {
        match self.object.get(name) {
            None => {
                self.push(name, "Missing data for required field.");
                None
            }
            Some(Value::String(s)) => match s.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    self.push(name, "Not a valid date.");
                    None
                }
            },
            Some(_) => {
                self.push(name, "Not a valid date.");
                None
            }
        }
    }
}
