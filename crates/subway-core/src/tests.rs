//! Unit tests for subway-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, StationId, VertexId};

    #[test]
    fn index_roundtrip() {
        let id = VertexId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VertexId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VertexId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(StationId(7).to_string(), "StationId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }

    #[test]
    fn from_raw() {
        assert_eq!(StationId::from(9u64), StationId(9));
    }
}

#[cfg(test)]
mod station {
    use std::collections::HashSet;

    use crate::{Station, StationId};

    #[test]
    fn equality_is_by_id_only() {
        let a = Station::new(1u64, "Gangnam");
        let renamed = Station::new(1u64, "Gangnam (Line 2)");
        let other = Station::new(2u64, "Gangnam");
        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn hash_collapses_same_id() {
        let set: HashSet<Station> = [
            Station::new(1u64, "Gangnam"),
            Station::new(1u64, "Gangnam again"),
            Station::new(2u64, "Yeoksam"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_shows_name_and_id() {
        let s = Station { id: StationId(5), name: "Seolleung".into() };
        assert_eq!(s.to_string(), "Seolleung (5)");
    }
}

#[cfg(test)]
mod distance {
    use crate::{CoreError, Distance};

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Distance::new(0), Err(CoreError::ZeroDistance));
        assert_eq!(Distance::try_from(0u32), Err(CoreError::ZeroDistance));
    }

    #[test]
    fn checked_sub_requires_positive_remainder() {
        let ten = Distance::new(10).unwrap();
        let four = Distance::new(4).unwrap();
        assert_eq!(ten.checked_sub(four), Some(Distance::new(6).unwrap()));
        assert_eq!(ten.checked_sub(ten), None);
        assert_eq!(four.checked_sub(ten), None);
    }

    #[test]
    fn checked_add() {
        let a = Distance::new(3).unwrap();
        let b = Distance::new(4).unwrap();
        assert_eq!(a.checked_add(b).unwrap().get(), 7);
        assert!(Distance::new(u32::MAX).unwrap().checked_add(a).is_none());
    }

    #[test]
    fn get_u64_widens() {
        assert_eq!(Distance::new(u32::MAX).unwrap().get_u64(), u64::from(u32::MAX));
    }
}
