/*
 * Unit tests for the route optimizer
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_empty_route
 * - test_start_below_all_floors
 * - test_start_above_all_floors
 * - test_start_between_floors
 * - test_route_keeps_duplicates
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod route_tests {
    use crate::elevator::map_shortest_route;

    #[test]
    fn test_empty_route() {
        // Purpose: Verify that an empty destination list stays empty

        let route = map_shortest_route(1, &[]);

        assert!(route.is_empty());
    }

    #[test]
    fn test_start_below_all_floors() {
        // Purpose: Verify that the route sweeps upwards when starting below every destination

        // Arrange
        let floors = vec![5, 3, 9];

        // Act
        let from_below = map_shortest_route(1, &floors);
        let from_lowest = map_shortest_route(3, &floors);

        // Assert
        assert_eq!(from_below, vec![3, 5, 9]);
        assert_eq!(from_lowest, vec![3, 5, 9]);
        assert_eq!(floors, vec![5, 3, 9]);
    }

    #[test]
    fn test_start_above_all_floors() {
        // Purpose: Verify that the route sweeps downwards when starting above every destination

        let from_above = map_shortest_route(20, &[5, 3, 9]);
        let from_highest = map_shortest_route(9, &[5, 3, 9]);

        assert_eq!(from_above, vec![9, 5, 3]);
        assert_eq!(from_highest, vec![9, 5, 3]);
    }

    #[test]
    fn test_start_between_floors() {
        // Purpose: Verify that a start between the extremes keeps the ascending order

        let route = map_shortest_route(6, &[9, 3]);

        assert_eq!(route, vec![3, 9]);
    }

    #[test]
    fn test_route_keeps_duplicates() {
        // Purpose: Verify that repeated floors are neither dropped nor merged

        let route = map_shortest_route(50, &[10, 40, 10, 40]);

        assert_eq!(route, vec![40, 40, 10, 10]);
    }
}
