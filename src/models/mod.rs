mod track;

pub use track::TrackRecord;
