use roomdesk_api::models::ObjectKind;

use crate::models::{BuildingTable, RoomObjectTable, RoomTable, RoomTypeTable, Table};

pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(mut tables: Vec<Box<dyn Table>>) -> Self {
        Self::sort_tables(&mut tables);
        Self { tables }
    }

    fn sort_tables(tables: &mut Vec<Box<dyn Table>>) {
        let mut to_sort = std::mem::take(tables);
        let mut deps_list: Vec<_> = to_sort.iter().map(|t| t.dependencies()).collect();
        let mut sorted = Vec::with_capacity(to_sort.len());

        while !to_sort.is_empty() {
            let independent_indices: Vec<usize> = deps_list
                .iter()
                .enumerate()
                .filter(|(_, deps)| deps.is_empty())
                .map(|(i, _)| i)
                .collect();

            assert!(
                !independent_indices.is_empty(),
                "Circular dependency detected or unresolved dependencies exist."
            );

            for &index in independent_indices.iter().rev() {
                let table = to_sort.swap_remove(index);
                let _ = deps_list.swap_remove(index);
                sorted.push(table);
            }

            for deps in deps_list.iter_mut() {
                deps.retain(|dep_name| {
                    !sorted
                        .iter()
                        .any(|resolved_table| resolved_table.name() == *dep_name)
                });
            }
        }

        *tables = sorted;
    }

    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|table| table.name()).collect()
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        let mut tables: Vec<Box<dyn Table>> = vec![
            Box::new(BuildingTable),
            Box::new(RoomTypeTable),
            Box::new(RoomTable),
        ];
        tables.extend(
            ObjectKind::ALL
                .into_iter()
                .map(|kind| Box::new(RoomObjectTable(kind)) as Box<dyn Table>),
        );

        SchemaManager::new(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTable {
        name: &'static str,
        dependencies: Vec<&'static str>,
    }

    impl Table for MockTable {
        fn name(&self) -> &'static str {
            self.name
        }

        fn create(&self) -> String {
            format!("CREATE TABLE {};", self.name)
        }

        fn dispose(&self) -> String {
            format!("DROP TABLE {};", self.name)
        }

        fn dependencies(&self) -> Vec<&'static str> {
            self.dependencies.clone()
        }
    }

    fn mock(name: &'static str, dependencies: Vec<&'static str>) -> Box<dyn Table> {
        Box::new(MockTable { name, dependencies })
    }

    #[test]
    fn test_correct_creation_order() {
        let tables = vec![
            mock("lamps", vec!["rooms"]),
            mock("rooms", vec!["buildings", "room_types"]),
            mock("room_types", vec![]),
            mock("buildings", vec![]),
        ];

        let manager = SchemaManager::new(tables);
        let statements = manager.create_schema();

        assert_eq!(statements.len(), 4);
        assert_eq!(statements[2], "CREATE TABLE rooms;");
        assert_eq!(statements[3], "CREATE TABLE lamps;");

        let dispose = manager.dispose_schema();
        assert_eq!(dispose[0], "DROP TABLE lamps;");
        assert_eq!(dispose[1], "DROP TABLE rooms;");
    }

    #[test]
    #[should_panic(expected = "Circular dependency")]
    fn test_circular_dependency_panics() {
        SchemaManager::new(vec![mock("a", vec!["b"]), mock("b", vec!["a"])]);
    }

    #[test]
    fn test_default_schema_orders_rooms_before_objects() {
        let manager = SchemaManager::default();
        let names = manager.table_names();
        let position = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert_eq!(names.len(), 3 + ObjectKind::ALL.len());
        assert!(position("buildings") < position("rooms"));
        assert!(position("room_types") < position("rooms"));
        for kind in ObjectKind::ALL {
            assert!(position("rooms") < position(kind.table()));
        }
    }
}
