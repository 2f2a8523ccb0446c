use serde::Serialize;

/// A track row as rendered back to the client.
///
/// All fields carry the raw dataset cells; numeric interpretation of
/// feature columns lives in the dataset's numeric views, not here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrackRecord {
    /// Unique identifier for the track within the dataset
    pub track_id: String,
    /// Track title as stored in the dataset
    pub track_name: String,
    /// Artist field, possibly comma-joined when multiple artists collaborate
    pub artists: String,
    /// Genre label or code
    pub track_genre: String,
    /// Popularity score as stored (rendered verbatim)
    pub popularity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_record_serializes_all_fields() {
        let record = TrackRecord {
            track_id: "4WNcduiCmDNfmTEz7JvmLv".to_string(),
            track_name: "Shape of You".to_string(),
            artists: "Ed Sheeran".to_string(),
            track_genre: "pop".to_string(),
            popularity: "98".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["track_name"], "Shape of You");
        assert_eq!(json["artists"], "Ed Sheeran");
        assert_eq!(json["popularity"], "98");
    }
}
