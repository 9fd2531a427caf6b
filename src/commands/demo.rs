//! `todo-store demo` command.

use super::print_outcomes;
use crate::context::ServiceContext;
use crate::script::{run_script, Operation, Script};

/// The walk-through: add a todo, complete it, look it up, then remove it.
///
/// The `id` arguments assume the sequential id strategy.
#[must_use]
pub fn demo_script() -> Script {
    let id = || "1".to_string();
    Script {
        operations: vec![
            Operation::Add { title: "Reticulate splines".into(), order: Some(0), completed: false },
            Operation::Update { id: id(), title: None, order: None, completed: Some(true) },
            Operation::Get { id: id() },
            Operation::List,
            Operation::Delete { id: id() },
            Operation::Get { id: id() },
            Operation::DeleteAll,
            Operation::List,
        ],
    }
}

/// Execute the `demo` command.
///
/// # Errors
///
/// Returns an error string if an outcome cannot be printed.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    print_outcomes(&run_script(&*ctx.todos, &demo_script()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::DataLayerError;
    use crate::script::StepValue;

    #[test]
    fn demo_walks_through_the_lifecycle() {
        let ctx = ServiceContext::live(&Config::default());
        let outcomes = run_script(&*ctx.todos, &demo_script());

        let Some(StepValue::Todo(updated)) = &outcomes[1].ok else {
            panic!("update should return a todo: {:?}", outcomes[1]);
        };
        assert_eq!(updated.id, "1");
        assert!(updated.completed);
        assert_eq!(updated.order, Some(0));

        assert_eq!(outcomes[5].error, Some(DataLayerError::TodoNotFound("1".into())));
        assert_eq!(outcomes[7].ok, Some(StepValue::Todos(Vec::new())));
    }
}
