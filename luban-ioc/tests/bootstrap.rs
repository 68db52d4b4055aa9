use luban_ioc::application::{bootstrap, create_default, ApplicationError, Lookup};
use luban_ioc::config::DEFAULT_BEAN_NAME;
use luban_ioc::dao::{DaoPtr, IndexDao};
use springtime_di::factory::ComponentFactoryBuilder;
use springtime_di::instance_provider::{
    ComponentInstanceProviderError, ComponentInstancePtr, TypedComponentInstanceProvider,
};

#[test]
fn should_resolve_dao_by_name() {
    let mut component_factory = ComponentFactoryBuilder::new().unwrap().build();

    let dao = component_factory.instance_by_name_typed::<DaoPtr>(DEFAULT_BEAN_NAME);
    assert!(dao.is_ok());
}

#[test]
fn should_resolve_same_dao_by_type_and_name() {
    let mut component_factory = ComponentFactoryBuilder::new().unwrap().build();

    let by_type = component_factory.primary_instance_typed::<IndexDao>().unwrap();
    let by_name = component_factory
        .instance_by_name_typed::<IndexDao>(DEFAULT_BEAN_NAME)
        .unwrap();

    assert!(ComponentInstancePtr::ptr_eq(&by_type, &by_name));
}

#[test]
fn should_run_with_both_lookups() {
    let mut application = create_default().unwrap();

    assert!(application
        .run(&Lookup::ByName(DEFAULT_BEAN_NAME.to_string()))
        .is_ok());
    assert!(application.run(&Lookup::ByType).is_ok());
}

#[test]
fn should_fail_resolving_unknown_name() {
    let mut application = create_default().unwrap();

    assert!(matches!(
        application
            .run(&Lookup::ByName("unknown".to_string()))
            .unwrap_err(),
        ApplicationError::ResolutionError(ComponentInstanceProviderError::NoNamedInstance(_))
    ));
}

#[test]
fn should_provide_default_config() {
    let mut application = create_default().unwrap();

    let config = application.config().unwrap();
    assert_eq!(config.bean_name, DEFAULT_BEAN_NAME);
}

#[test]
fn should_bootstrap_with_default_config() {
    assert!(bootstrap().is_ok());
}
