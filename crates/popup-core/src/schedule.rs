use std::collections::BTreeMap;

/// Immutable name -> start-frame offsets used to stagger channel starts
/// against the base timeline. Channels not listed start at frame 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerSchedule {
    offsets: BTreeMap<String, i64>,
}

impl TriggerSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, offset: i64) {
        self.offsets.insert(name.into(), offset);
    }

    pub fn offset_for(&self, name: &str) -> i64 {
        self.offsets.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.offsets.iter().map(|(name, &offset)| (name.as_str(), offset))
    }
}

impl FromIterator<(String, i64)> for TriggerSchedule {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            offsets: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_channels_start_at_zero() {
        let mut schedule = TriggerSchedule::new();
        schedule.set("bell", 40);
        schedule.set("thumb_up", 50);

        assert_eq!(schedule.offset_for("bell"), 40);
        assert_eq!(schedule.offset_for("thumb_up"), 50);
        assert_eq!(schedule.offset_for("box"), 0);
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn iteration_is_name_ordered() {
        let schedule: TriggerSchedule = [("b".to_string(), 2), ("a".to_string(), 1)]
            .into_iter()
            .collect();
        let names: Vec<&str> = schedule.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
