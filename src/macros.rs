/// Generate one `#[tokio::test]` per suite case.
///
/// Takes an expression evaluating to a future of `Result<Suite, TestError>`; it is evaluated
/// anew in every generated test, so each case gets its own suite (and database, if the
/// constructor provisions one). The calling crate must depend on `tokio` with the `macros`
/// and `rt` features.
///
/// ```ignore
/// mod profile {
///     restcheck::ownership_crud_tests!(ProfileSuite::new());
/// }
/// ```
#[macro_export]
macro_rules! ownership_crud_tests {
    (@case $setup:expr, $name:ident, $case:ident) => {
        #[::tokio::test]
        async fn $name() -> ::std::result::Result<(), $crate::TestError> {
            let suite = $setup.await?;

            $crate::CrudSuite::run(&suite, $crate::Case::$case).await
        }
    };

    ($setup:expr) => {
        $crate::ownership_crud_tests!(@case $setup, create, Create);
        $crate::ownership_crud_tests!(@case $setup, list_by_owner, ListByOwner);
        $crate::ownership_crud_tests!(@case $setup, get_by_owner, GetByOwner);
        $crate::ownership_crud_tests!(@case $setup, anonymous_get_denied, AnonymousGetDenied);
        $crate::ownership_crud_tests!(@case $setup, get_non_owner_denied, GetNonOwnerDenied);
        $crate::ownership_crud_tests!(@case $setup, put_owner, PutOwner);
        $crate::ownership_crud_tests!(@case $setup, anonymous_put_denied, AnonymousPutDenied);
        $crate::ownership_crud_tests!(@case $setup, readonly_fields, ReadonlyFields);
        $crate::ownership_crud_tests!(@case $setup, delete, Delete);
    };
}
