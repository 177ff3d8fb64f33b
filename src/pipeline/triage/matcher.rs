use super::types::{DoctorRecord, SuggestedDoctor, GENERAL_PHYSICIAN};

/// Pick the doctor to suggest for the requested specialization.
///
/// Order of preference:
/// 1. first record whose specialization contains `doctor_type` (case-insensitive),
/// 2. first record whose specialization is exactly "General Physician",
/// 3. the hardcoded default doctor.
///
/// First match in directory order wins; there is no ranking. An empty
/// `doctor_type` is contained in every specialization, so it selects the
/// first record.
pub fn match_doctor(doctor_type: &str, directory: &[DoctorRecord]) -> SuggestedDoctor {
    let wanted = doctor_type.to_lowercase();

    directory
        .iter()
        .find(|doc| doc.specialization.to_lowercase().contains(&wanted))
        .or_else(|| {
            directory
                .iter()
                .find(|doc| doc.specialization == GENERAL_PHYSICIAN)
        })
        .map(SuggestedDoctor::from_record)
        .unwrap_or_else(SuggestedDoctor::default_doctor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: &str, specialization: &str) -> DoctorRecord {
        DoctorRecord {
            name: name.into(),
            specialization: specialization.into(),
            hospital: "Apollo".into(),
            available: true,
            availability_time: vec![],
        }
    }

    #[test]
    fn case_insensitive_substring_match() {
        let directory = vec![
            doctor("Dr. Heart", "Cardiologist"),
            doctor("Dr. A", "General Physician"),
        ];
        let suggested = match_doctor("cardiologist", &directory);
        assert_eq!(suggested.name, "Dr. Heart");
        assert_eq!(suggested.specialty, "Cardiologist");
    }

    #[test]
    fn partial_type_matches_longer_specialization() {
        let directory = vec![doctor("Dr. Skin", "Dermatologist (Skin & Hair)")];
        assert_eq!(match_doctor("DERMATOLOGIST", &directory).name, "Dr. Skin");
    }

    #[test]
    fn first_match_wins() {
        let directory = vec![
            doctor("Dr. First", "Cardiologist"),
            doctor("Dr. Second", "Interventional Cardiologist"),
        ];
        assert_eq!(match_doctor("cardiologist", &directory).name, "Dr. First");
    }

    #[test]
    fn no_match_falls_back_to_general_physician() {
        let directory = vec![
            doctor("Dr. Bones", "Orthopedist"),
            doctor("Dr. A", "General Physician"),
        ];
        let suggested = match_doctor("xyz-nonexistent", &directory);
        assert_eq!(suggested.name, "Dr. A");
        assert_eq!(suggested.specialty, "General Physician");
    }

    #[test]
    fn general_physician_fallback_is_exact_match() {
        let directory = vec![doctor("Dr. Lower", "general physician")];
        let suggested = match_doctor("xyz-nonexistent", &directory);
        assert_eq!(suggested, SuggestedDoctor::default_doctor());
    }

    #[test]
    fn empty_directory_gives_default_doctor() {
        let suggested = match_doctor("anything", &[]);
        assert_eq!(suggested.name, "Dr. Sahil");
        assert_eq!(suggested.specialty, "General Physician");
        assert_eq!(suggested.hospital, "City Hospital");
        assert!(suggested.available);
    }

    #[test]
    fn empty_doctor_type_selects_first_record() {
        let directory = vec![
            doctor("Dr. Bones", "Orthopedist"),
            doctor("Dr. A", "General Physician"),
        ];
        assert_eq!(match_doctor("", &directory).name, "Dr. Bones");
    }

    #[test]
    fn no_plural_normalization() {
        let directory = vec![doctor("Dr. Heart", "Cardiologist")];
        assert_eq!(
            match_doctor("cardiologists", &directory),
            SuggestedDoctor::default_doctor()
        );
    }

    #[test]
    fn availability_is_copied() {
        let mut busy = doctor("Dr. Busy", "Neurologist");
        busy.available = false;
        assert!(!match_doctor("neuro", &[busy]).available);
    }
}
