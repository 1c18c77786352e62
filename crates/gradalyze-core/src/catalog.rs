//! Static program catalog tables.
//!
//! Reference data (course code, title, unit count, semester bucket) for the
//! two supported curricula. Slots pre-populate editable grade rows keyed by
//! a stable id; a slot becomes a [`GradeRecord`] when the user selects a
//! grade for it. One table drives the whole catalog — rows are data, not
//! hand-duplicated forms.

use crate::models::{Curriculum, GradeRecord};

/// One course slot in a program catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSlot {
    /// Stable identifier, copied into the resulting record id.
    pub id: &'static str,
    pub code: &'static str,
    pub title: &'static str,
    pub units: f64,
    pub semester: &'static str,
}

impl CatalogSlot {
    /// Materialize a grade record for this slot with the selected grade.
    pub fn to_record(&self, grade: f64) -> GradeRecord {
        GradeRecord {
            id: self.id.to_string(),
            subject: self.title.to_string(),
            course_code: self.code.to_string(),
            units: self.units,
            grade,
            semester: self.semester.to_string(),
        }
    }
}

const Y1S1: &str = "First Year - 1st Semester";
const Y1S2: &str = "First Year - 2nd Semester";
const Y2S1: &str = "Second Year - 1st Semester";
const Y2S2: &str = "Second Year - 2nd Semester";

const BSCS: &[CatalogSlot] = &[
    CatalogSlot { id: "bscs-icc0101", code: "ICC 0101", title: "Introduction to Computing", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-icc0102", code: "ICC 0102", title: "Fundamentals of Programming", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-mmw0001", code: "MMW 0001", title: "Mathematics in the Modern World", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-pcm0006", code: "PCM 0006", title: "Purposive Communication", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-uts0003", code: "UTS 0003", title: "Understanding the Self", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-ped0001", code: "PED 0001", title: "Physical Education 1", units: 2.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-nstp01", code: "NSTP 01", title: "National Service Training Program 1", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bscs-icc0103", code: "ICC 0103", title: "Intermediate Programming", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-csc0211", code: "CSC 0211", title: "Discrete Structures 1", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-rph0004", code: "RPH 0004", title: "Readings in Philippine History", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-sts0002", code: "STS 0002", title: "Science, Technology and Society", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-ped0002", code: "PED 0002", title: "Physical Education 2", units: 2.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-nstp02", code: "NSTP 02", title: "National Service Training Program 2", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bscs-icc0104", code: "ICC 0104", title: "Data Structures and Algorithms", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bscs-csc0212", code: "CSC 0212", title: "Object-Oriented Programming", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bscs-csc0213", code: "CSC 0213", title: "Discrete Structures 2", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bscs-tcw0005", code: "TCW 0005", title: "The Contemporary World", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bscs-ped0003", code: "PED 0003", title: "Physical Education 3", units: 2.0, semester: Y2S1 },
    CatalogSlot { id: "bscs-icc0105", code: "ICC 0105", title: "Information Management", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bscs-csc0221", code: "CSC 0221", title: "Algorithms and Complexity", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bscs-csc0222", code: "CSC 0222", title: "Architecture and Organization", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bscs-eth0008", code: "ETH 0008", title: "Ethics", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bscs-ped0004", code: "PED 0004", title: "Physical Education 4", units: 2.0, semester: Y2S2 },
];

const BSIT: &[CatalogSlot] = &[
    CatalogSlot { id: "bsit-icc0101", code: "ICC 0101", title: "Introduction to Computing", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-icc0102", code: "ICC 0102", title: "Fundamentals of Programming", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-mmw0001", code: "MMW 0001", title: "Mathematics in the Modern World", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-pcm0006", code: "PCM 0006", title: "Purposive Communication", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-uts0003", code: "UTS 0003", title: "Understanding the Self", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-ped0001", code: "PED 0001", title: "Physical Education 1", units: 2.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-nstp01", code: "NSTP 01", title: "National Service Training Program 1", units: 3.0, semester: Y1S1 },
    CatalogSlot { id: "bsit-icc0103", code: "ICC 0103", title: "Intermediate Programming", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-ite0001", code: "ITE 0001", title: "IT Fundamentals", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-rph0004", code: "RPH 0004", title: "Readings in Philippine History", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-sts0002", code: "STS 0002", title: "Science, Technology and Society", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-ped0002", code: "PED 0002", title: "Physical Education 2", units: 2.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-nstp02", code: "NSTP 02", title: "National Service Training Program 2", units: 3.0, semester: Y1S2 },
    CatalogSlot { id: "bsit-icc0104", code: "ICC 0104", title: "Data Structures and Algorithms", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bsit-net0101", code: "NET 0101", title: "Networking 1", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bsit-wdv0101", code: "WDV 0101", title: "Web Development 1", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bsit-tcw0005", code: "TCW 0005", title: "The Contemporary World", units: 3.0, semester: Y2S1 },
    CatalogSlot { id: "bsit-ped0003", code: "PED 0003", title: "Physical Education 3", units: 2.0, semester: Y2S1 },
    CatalogSlot { id: "bsit-icc0105", code: "ICC 0105", title: "Information Management", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bsit-ias0101", code: "IAS 0101", title: "Information Assurance and Security 1", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bsit-sad0101", code: "SAD 0101", title: "Systems Analysis and Design", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bsit-eth0008", code: "ETH 0008", title: "Ethics", units: 3.0, semester: Y2S2 },
    CatalogSlot { id: "bsit-ped0004", code: "PED 0004", title: "Physical Education 4", units: 2.0, semester: Y2S2 },
];

/// All catalog slots for a curriculum, in catalog order.
pub fn curriculum_slots(curriculum: Curriculum) -> &'static [CatalogSlot] {
    match curriculum {
        Curriculum::ComputerScience => BSCS,
        Curriculum::InformationTechnology => BSIT,
    }
}

/// Look up a slot by its stable id.
pub fn find_slot(curriculum: Curriculum, id: &str) -> Option<&'static CatalogSlot> {
    curriculum_slots(curriculum).iter().find(|s| s.id == id)
}

/// Semester buckets for a curriculum, deduplicated in first-appearance order.
pub fn semesters(curriculum: Curriculum) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for slot in curriculum_slots(curriculum) {
        if !seen.contains(&slot.semester) {
            seen.push(slot.semester);
        }
    }
    seen
}
