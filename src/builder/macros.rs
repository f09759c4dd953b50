//! Macros for declaring question banks inline.

/// Build a validated question bank from inline declarations.
///
/// Expands to a `Result<Vec<Question>, BuildError>`.
///
/// # Example
///
/// ```
/// use trivia_engine::quiz_bank;
///
/// let bank = quiz_bank! {
///     "Which layout is vertical?" => ["Row", "Box", "Column"], correct: 2;
///     "Which layout is horizontal?" => ["Column", "Row"], correct: 1;
/// }
/// .unwrap();
///
/// assert_eq!(bank.len(), 2);
/// assert_eq!(bank[0].correct_option(), Some("Column"));
/// ```
#[macro_export]
macro_rules! quiz_bank {
    (
        $(
            $text:expr => [ $($option:expr),+ $(,)? ], correct: $correct:expr
        );+ $(;)?
    ) => {
        (|| -> ::std::result::Result<
            ::std::vec::Vec<$crate::core::Question>,
            $crate::builder::BuildError,
        > {
            let builder = $crate::builder::BankBuilder::new();
            $(
                let builder = builder.question(
                    $crate::builder::QuestionBuilder::new()
                        .text($text)
                        $(.option($option))+
                        .correct($correct),
                )?;
            )+
            builder.build()
        })()
    };
}
