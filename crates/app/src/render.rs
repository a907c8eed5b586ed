//! Text rendering of quiz views.

use colored::Colorize;

use services::{QuizKind, QuizView};

#[must_use]
pub fn render_home() -> String {
    let mut lines = vec![
        "Music Quiz App".bold().to_string(),
        "Choose a quiz to test your knowledge".to_string(),
        String::new(),
    ];
    for (idx, kind) in QuizKind::ALL.iter().enumerate() {
        lines.push(format!("  {}. {}", idx + 1, kind.title().bold()));
        lines.push(format!("     {}", kind.description().dimmed()));
    }
    lines.push(String::new());
    lines.push("Select a quiz by number, or q to quit.".to_string());
    lines.join("\n")
}

#[must_use]
pub fn render_view(view: &QuizView) -> String {
    let mut lines = vec![
        format!("{}  {}", view.title.bold(), view.score_label.dimmed()),
        String::new(),
        view.question.clone(),
    ];

    for (idx, option) in view.options.iter().enumerate() {
        let marker = if view.selection.as_deref() == Some(option.as_str()) {
            "(*)"
        } else {
            "( )"
        };
        lines.push(format!("  {marker} {}. {option}", idx + 1));
    }

    if let (Some(correct), Some(feedback)) = (view.correct, view.feedback.as_deref()) {
        lines.push(String::new());
        if correct {
            lines.push(format!("{} {}", "✓".green(), feedback.green()));
        } else {
            lines.push(format!("{} {}", "✗".red(), feedback.red()));
        }
    }

    lines.push(String::new());
    let hint = if view.answered {
        "n: next question   r: reset   h: history   q: quit"
    } else if view.can_submit() {
        "s: submit answer   1-4: change selection   r: reset   q: quit"
    } else {
        "1-4: select an option   r: reset   q: quit"
    };
    lines.push(hint.dimmed().to_string());
    lines.join("\n")
}

#[must_use]
pub fn render_history(view: &QuizView) -> String {
    if view.history.is_empty() {
        return "No answers yet.".to_string();
    }

    let mut lines = vec!["Recent Answers".bold().to_string()];
    for item in &view.history {
        let mark = if item.correct {
            "✓".green()
        } else {
            "✗".red()
        };
        lines.push(format!("{mark} {}", item.question));
        lines.push(format!("    Your answer: {}", item.user_answer));
        if let Some(correct_answer) = &item.correct_answer {
            lines.push(format!("    Correct answer: {correct_answer}"));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::HistoryItemView;
    use trivia_core::model::Score;

    fn view() -> QuizView {
        QuizView {
            title: "Composer Quiz".into(),
            question: "When was Bernard Herrmann born?".into(),
            options: vec!["1905".into(), "1911".into(), "1920".into(), "1928".into()],
            selection: Some("1928".into()),
            answered: true,
            correct: Some(false),
            feedback: Some("Incorrect. Bernard Herrmann was born in 1911.".into()),
            score: Score::new(),
            score_label: "Score: 0/1 (0%)".into(),
            history: vec![HistoryItemView {
                question: "When was Bernard Herrmann born?".into(),
                user_answer: "1928".into(),
                correct: false,
                correct_answer: Some("1911".into()),
            }],
        }
    }

    #[test]
    fn view_marks_selection_and_feedback() {
        let text = render_view(&view());
        assert!(text.contains("(*) 4. 1928"));
        assert!(text.contains("( ) 2. 1911"));
        assert!(text.contains("Incorrect. Bernard Herrmann was born in 1911."));
        assert!(text.contains("n: next question"));
    }

    #[test]
    fn history_shows_correct_answer_for_misses() {
        let text = render_history(&view());
        assert!(text.contains("Your answer: 1928"));
        assert!(text.contains("Correct answer: 1911"));
    }

    #[test]
    fn home_lists_both_quizzes() {
        let text = render_home();
        assert!(text.contains("Movie Music Quiz"));
        assert!(text.contains("Composer Quiz"));
    }
}
