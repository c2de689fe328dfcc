use portal_core::model::{
    MODULE_COUNT, ModuleNumber, ProgressRecord, completed_count, completion_percent, module_name,
};

/// Status row for one module in the progress panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleStatusVm {
    pub number: ModuleNumber,
    pub name: &'static str,
    pub completed: bool,
}

impl ModuleStatusVm {
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✓ Selesai"
        } else {
            "Belum dimulai"
        }
    }

    #[must_use]
    pub fn row_class(&self) -> &'static str {
        if self.completed {
            "progress-item progress-item--done"
        } else {
            "progress-item"
        }
    }
}

/// View-model for the hero stats and the progress panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub percent: u8,
    pub completed_count: usize,
    pub total_modules: u8,
    pub modules: Vec<ModuleStatusVm>,
}

#[must_use]
pub fn map_progress(progress: &[ProgressRecord], username: &str) -> ProgressVm {
    let modules = ModuleNumber::all()
        .map(|number| ModuleStatusVm {
            number,
            name: module_name(number),
            completed: progress
                .iter()
                .any(|record| record.completed && record.matches(username, number)),
        })
        .collect();

    ProgressVm {
        percent: completion_percent(progress, username),
        completed_count: completed_count(progress, username),
        total_modules: MODULE_COUNT,
        modules,
    }
}
