mod manager_test;
