//! Closed mapping from known module ids to display icons

/// The clinical module families the dashboard knows icons for. Backend
/// ids outside this set render with the generic fallback glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    PatientManagement,
    PatientRegistration,
    ExamScheduling,
    ProcedureManagement,
    DiagnosticReporting,
    ImageArchiving,
    Other,
}

impl ModuleKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "patient-management" => ModuleKind::PatientManagement,
            "patient-registration" => ModuleKind::PatientRegistration,
            "exam-scheduling" => ModuleKind::ExamScheduling,
            "procedure-management" => ModuleKind::ProcedureManagement,
            "diagnostic-reporting" => ModuleKind::DiagnosticReporting,
            "image-archiving" => ModuleKind::ImageArchiving,
            _ => ModuleKind::Other,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ModuleKind::PatientManagement => "◉",
            ModuleKind::PatientRegistration => "✚",
            ModuleKind::ExamScheduling => "◷",
            ModuleKind::ProcedureManagement => "☰",
            ModuleKind::DiagnosticReporting => "▤",
            ModuleKind::ImageArchiving => "▣",
            ModuleKind::Other => "▦",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_map_to_kinds() {
        assert_eq!(
            ModuleKind::from_id("patient-management"),
            ModuleKind::PatientManagement
        );
        assert_eq!(
            ModuleKind::from_id("image-archiving"),
            ModuleKind::ImageArchiving
        );
    }

    #[test]
    fn unknown_id_falls_back() {
        assert_eq!(ModuleKind::from_id("billing"), ModuleKind::Other);
        assert_eq!(ModuleKind::from_id(""), ModuleKind::Other);
    }
}
