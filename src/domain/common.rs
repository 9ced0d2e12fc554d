use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Inserts or replaces an entry in place, keyed by its identifier.
///
/// The id is the merge key: an incoming entry with a known id replaces the
/// stored one, otherwise it is appended at the end of the list.
pub fn upsert<T: Identifiable>(list: &mut Vec<T>, incoming: T) {
    match list.iter_mut().find(|entry| entry.id() == incoming.id()) {
        Some(existing) => *existing = incoming,
        None => list.push(incoming),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged {
        id: Uuid,
        label: &'static str,
    }

    impl Identifiable for Tagged {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[test]
    fn upsert_replaces_matching_id_and_appends_new() {
        let first = Uuid::new_v4();
        let mut list = vec![Tagged {
            id: first,
            label: "original",
        }];

        upsert(
            &mut list,
            Tagged {
                id: first,
                label: "updated",
            },
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].label, "updated");

        upsert(
            &mut list,
            Tagged {
                id: Uuid::new_v4(),
                label: "other",
            },
        );
        assert_eq!(list.len(), 2);
    }
}
